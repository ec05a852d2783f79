use calltrace::framework::{LogTrace, MemorySink, ThreadLocalTrace, TraceConfig};
use calltrace::lifecycle::TraceSystem;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("boom: {0}")]
struct Boom(String);

#[derive(Debug, Error)]
#[error("request rejected")]
struct Rejected(#[source] Boom);

fn token_of(line: &str) -> &str {
    &line[1..9]
}

/// Single un-nested call with completion logging enabled: exactly four
/// records (start banner, begin body, complete body, end banner).
#[test]
fn single_call_produces_the_full_record_sequence() {
    let sink = MemorySink::new();
    let trace = ThreadLocalTrace::with_sink(sink.clone(), TraceConfig::default());

    let status = trace.begin("foo");
    trace.end(status);

    let lines = sink.lines();
    let token = token_of(&lines[0]).to_string();
    assert_eq!(
        lines,
        vec![
            format!("[{}] === REQ START===", token),
            format!("[{}] foo", token),
            format!("[{}] foo", token),
            format!("[{}] === RES COMPLETE===", token),
        ]
    );
}

/// Nested failure: the inner record gets one indent level with the exception
/// prefix and lists its params; the outer record gets zero indent; thread
/// state is fully released after the outer completion.
#[test]
fn nested_exceptions_unwind_and_release_the_thread_state() {
    let sink = MemorySink::new();
    let trace = ThreadLocalTrace::with_sink(sink.clone(), TraceConfig::default());

    let outer = trace.begin("outer");
    let inner = trace.begin("inner");
    let error = Boom("inner failed".into());
    trace.exception(inner, &error, &["1".to_string(), "2".to_string()]);
    trace.exception(outer, &error, &[]);

    let errors = sink.errors();
    let token = token_of(&sink.lines()[0]).to_string();
    assert_eq!(
        errors[0],
        format!(
            "[{}] |X inner \n exception = \nboom: inner failed\n from = \n\n params = \n1,\n2,\n",
            token
        )
    );
    assert_eq!(
        errors[1],
        format!(
            "[{}] outer \n exception = \nboom: inner failed\n from = \n\n params = \n",
            token
        )
    );
    // The end banner closed the root even though it errored.
    assert!(sink.lines().last().unwrap().ends_with("=== RES COMPLETE==="));

    // State is back to absent: a new call starts a fresh root trace.
    sink.clear();
    let next = trace.begin("next");
    trace.end(next);
    let lines = sink.lines();
    assert!(lines[0].ends_with("=== REQ START==="));
    assert_ne!(token_of(&lines[0]), token);
}

/// The error record renders the origin chain, newline-joined, between the
/// `from =` and `params =` sections.
#[test]
fn error_records_render_the_origin_chain() {
    let sink = MemorySink::new();
    let trace = ThreadLocalTrace::with_sink(sink.clone(), TraceConfig::default());

    let status = trace.begin("submit");
    let error = Rejected(Boom("downstream".into()));
    trace.exception(status, &error, &[]);

    let errors = sink.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains(
        " exception = \nrequest rejected\n from = \nboom: downstream\n params = \n"
    ));
}

/// Disabling completion logging suppresses only the non-error completion
/// body line; begin lines, banners, and error records are unaffected.
#[test]
fn completion_flag_only_suppresses_the_completion_body() {
    let sink = MemorySink::new();
    let system = TraceSystem::with_sink(
        sink.clone(),
        TraceConfig {
            complete_enabled: false,
        },
    );
    let interceptor = system.interceptor();

    let ok: Result<u32, Boom> = interceptor.invoke("quiet", &[], || Ok(1));
    assert_eq!(ok.unwrap(), 1);

    let lines = sink.lines();
    let token = token_of(&lines[0]).to_string();
    assert_eq!(
        lines,
        vec![
            format!("[{}] === REQ START===", token),
            format!("[{}] quiet", token),
            format!("[{}] === RES COMPLETE===", token),
        ]
    );

    // Errors are always recorded, flag or no flag.
    sink.clear();
    let failed: Result<u32, Boom> =
        interceptor.invoke("noisy", &[], || Err(Boom("still logged".into())));
    assert!(failed.is_err());
    assert_eq!(sink.errors().len(), 1);
}

/// A failure reported without a status still yields a complete error record
/// under a synthesized root identifier.
#[test]
fn missing_status_is_synthesized_on_the_failure_path() {
    let sink = MemorySink::new();
    let system = TraceSystem::with_sink(sink.clone(), TraceConfig::default());
    let interceptor = system.interceptor();

    interceptor.report_failure(None, "orphaned", &Boom("lost".into()), &["a".to_string()]);

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("orphaned \n exception = \nboom: lost"));
    assert!(lines[0].ends_with(" params = \na,\n"));
    assert!(lines[1].ends_with("=== RES COMPLETE==="));
}

/// Two threads tracing concurrently get distinct tokens and independent,
/// correctly ordered trees.
#[test]
fn concurrent_threads_keep_independent_traces() {
    let sink = MemorySink::new();
    let system = TraceSystem::with_sink(sink.clone(), TraceConfig::default());

    let mut handles = vec![];
    for _ in 0..2 {
        let interceptor = system.interceptor();
        handles.push(std::thread::spawn(move || {
            let result: Result<u32, Boom> = interceptor.invoke("outer", &[], || {
                interceptor.invoke("inner", &[], || Ok(1))
            });
            result.unwrap()
        }));
    }
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), 12);

    let mut tokens: Vec<String> = lines.iter().map(|l| token_of(l).to_string()).collect();
    tokens.sort();
    tokens.dedup();
    assert_eq!(tokens.len(), 2, "each thread must get its own token");

    // Within a token, the sequence is a complete, correctly nested tree.
    for token in tokens {
        let tree: Vec<&String> = lines
            .iter()
            .filter(|l| token_of(l.as_str()) == token)
            .collect();
        assert_eq!(
            *tree[0],
            format!("[{}] === REQ START===", token)
        );
        assert_eq!(*tree[1], format!("[{}] outer", token));
        assert_eq!(*tree[2], format!("[{}] |-> inner", token));
        assert_eq!(*tree[3], format!("[{}] |<- inner", token));
        assert_eq!(*tree[4], format!("[{}] outer", token));
        assert_eq!(
            *tree[5],
            format!("[{}] === RES COMPLETE===", token)
        );
    }
}

/// The begin/complete pairing holds across an arbitrary properly nested
/// sequence: after the outermost completion the next trace is a fresh root.
#[test]
fn deep_nesting_returns_to_a_clean_slate() {
    let sink = MemorySink::new();
    let trace = ThreadLocalTrace::with_sink(sink.clone(), TraceConfig::default());

    let a = trace.begin("a");
    let b = trace.begin("b");
    let c = trace.begin("c");
    trace.end(c);
    let d = trace.begin("d");
    trace.end(d);
    trace.end(b);
    trace.end(a);

    let lines = sink.lines();
    let token = token_of(&lines[0]).to_string();
    // One start banner, one end banner, everything under one token.
    assert_eq!(lines.iter().filter(|l| l.ends_with("=== REQ START===")).count(), 1);
    assert_eq!(lines.iter().filter(|l| l.ends_with("=== RES COMPLETE===")).count(), 1);
    assert!(lines.iter().all(|l| token_of(l) == token));
    // Siblings at depth 2 both render under b's filler.
    assert!(lines.contains(&format!("[{}] |   |-> c", token)));
    assert!(lines.contains(&format!("[{}] |   |-> d", token)));

    sink.clear();
    let fresh = trace.begin("fresh");
    trace.end(fresh);
    assert!(sink.lines()[0].ends_with("=== REQ START==="));
    assert_ne!(token_of(&sink.lines()[0]), token);
}
