//! Outcome integration tests

use mockall::predicate::eq;
use status_result::{
    error, error_empty, success, success_empty, Callbacks, Failure, MatchArms, NarrowError,
    Outcome, Success,
};

#[mockall::automock]
trait Handler {
    fn on_ok(&self, data: i32) -> i32;
    fn on_err(&self, err: String) -> i32;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Greeting {
    greeting: String,
}

fn foo(flag: bool) -> Outcome<Greeting> {
    if flag {
        return status_result::success!(Greeting {
            greeting: "hello!".to_string(),
        });
    }
    status_result::error!()
}

#[test]
fn test_discriminant_correctness() {
    for value in [0, 1, -7, i32::MAX] {
        assert!(success::<_, ()>(value).success());
        assert!(!error::<(), _>(value).success());
    }
}

#[test]
fn test_payload_identity() {
    let text = String::from("payload");
    let ptr = text.as_ptr();
    let res: Outcome<String, ()> = success(text);
    assert_eq!(res.data().map(|s| s.as_ptr()), Some(ptr));

    let text = String::from("reason");
    let ptr = text.as_ptr();
    let res: Outcome<(), String> = error(text);
    let owned = res.into_match(|_| String::new(), |e| e);
    assert_eq!(owned.as_ptr(), ptr);
}

#[test]
fn test_sentinel_default() {
    let ok: Outcome<(), u32> = success_empty();
    assert_eq!(ok.data(), Some(&()));
    assert_eq!(ok.err(), None);

    let fail: Outcome<u32, ()> = error_empty();
    assert_eq!(fail.err(), Some(&()));
    assert_eq!(fail.data(), None);
}

#[test]
fn test_mutual_exclusivity() {
    let outcomes: Vec<Outcome<i32, &str>> = vec![success(1), error("a"), success(2), error("b")];
    for res in &outcomes {
        assert_ne!(res.data().is_some(), res.err().is_some());
        assert_eq!(res.data().is_some(), res.success());
    }
}

#[test]
fn test_success_dispatches_is_ok_exactly_once() {
    let mut handler = MockHandler::new();
    handler
        .expect_on_ok()
        .with(eq(5))
        .times(1)
        .returning(|x| x + 1);
    handler.expect_on_err().times(0);

    let res: Outcome<i32, String> = success(5);
    assert_eq!(res.is_ok(|x| handler.on_ok(*x)), Some(6));
    assert_eq!(res.is_err(|e| handler.on_err(e.clone())), None);
}

#[test]
fn test_failure_dispatches_is_err_exactly_once() {
    let mut handler = MockHandler::new();
    handler.expect_on_ok().times(0);
    handler
        .expect_on_err()
        .with(eq("bad".to_string()))
        .times(1)
        .returning(|e| e.len() as i32);

    let res: Outcome<i32, String> = error("bad".to_string());
    assert_eq!(res.is_ok(|x| handler.on_ok(*x)), None);
    assert_eq!(res.is_err(|e| handler.on_err(e.clone())), Some(3));
}

#[test]
fn test_match_totality() {
    for res in [success(10), error("oops".to_string())] {
        let mut handler = MockHandler::new();
        if res.success() {
            handler.expect_on_ok().times(1).returning(|x| x);
            handler.expect_on_err().times(0);
        } else {
            handler.expect_on_ok().times(0);
            handler.expect_on_err().times(1).returning(|e| -(e.len() as i32));
        }

        let out = res.match_with(|x| handler.on_ok(*x), |e| handler.on_err(e.clone()));
        let expected = if res.success() { 10 } else { -4 };
        assert_eq!(out, expected);
    }
}

#[test]
fn test_scenario_success_with_payload() {
    let res = foo(true);
    assert!(res.success());
    assert_eq!(res.data().map(|d| d.greeting.as_str()), Some("hello!"));
    assert!(res.err().is_none());
}

#[test]
fn test_scenario_failure_with_no_payload() {
    let res = foo(false);
    assert!(!res.success());
    assert_eq!(res.err(), Some(&()));
    assert!(res.data().is_none());
}

#[test]
fn test_scenario_match_routing() {
    let ok: Outcome<i32, &str> = success(5);
    assert_eq!(ok.match_with(|x| x + 1, |_| -1), 6);

    let fail: Outcome<usize, &str> = error("bad");
    assert_eq!(fail.match_with(|_| 0, |e| e.len()), 3);
}

#[test]
fn test_narrowing_after_destructure() {
    for flag in [true, false] {
        let res = foo(flag);
        match &res {
            Outcome::Success(ok) => {
                assert!(flag);
                assert_eq!(ok.data().greeting, "hello!");
                assert!(ok.err().is_none());
            }
            Outcome::Failure(fail) => {
                assert!(!flag);
                assert_eq!(fail.err(), &());
                assert!(fail.data().is_none());
            }
        }

        if let Outcome::Failure(fail) = res {
            let () = fail.into_err();
        }
    }
}

#[test]
fn test_runtime_narrowing_with_question_mark() {
    fn greeting_len(res: &Outcome<Greeting>) -> Result<usize, NarrowError> {
        let ok = res.as_success()?;
        Ok(ok.data().greeting.len())
    }

    assert_eq!(greeting_len(&foo(true)), Ok(6));
    assert_eq!(greeting_len(&foo(false)), Err(NarrowError::ExpectedSuccess));
}

#[test]
fn test_widening_from_narrowed_variants() {
    let ok: Outcome<u8, &str> = Success::new(1).into();
    let fail: Outcome<u8, &str> = Failure::new("no").into();
    assert_eq!(ok, success(1));
    assert_eq!(fail, error("no"));
}

struct Summary;

impl MatchArms<u32, String> for Summary {
    type Output = String;

    fn is_ok(self, data: u32) -> String {
        format!("{data} items")
    }

    fn is_err(self, err: String) -> String {
        format!("failed: {err}")
    }
}

#[test]
fn test_visit_with_custom_arms() {
    let ok: Outcome<u32, String> = success(3);
    assert_eq!(ok.visit(Summary), "3 items");

    let fail: Outcome<u32, String> = error("timeout".to_string());
    assert_eq!(fail.visit(Summary), "failed: timeout");

    let ok: Outcome<u32, String> = success(4);
    let doubled = ok.visit(Callbacks::new(|x: u32| x * 2, |_: String| 0));
    assert_eq!(doubled, 8);
}

#[test]
fn test_outcome_shared_across_threads() {
    let res: Outcome<Vec<i32>, String> = success(vec![1, 2, 3]);
    let shared = std::sync::Arc::new(res);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = std::sync::Arc::clone(&shared);
            std::thread::spawn(move || shared.match_with(|v| v.iter().sum::<i32>(), |_| -1))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 6);
    }
}
