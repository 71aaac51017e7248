use result_of::{Panic, Result};
use std::{panic, sync::Arc, thread};
use thiserror::Error;

#[derive(Error, Debug)]
enum AppError {
    #[error("panicked: {0}")]
    Panicked(#[from] Panic),
}

fn assert_send_sync<T: Send + Sync>(_: &T) {}

#[test]
fn captured_results_are_send_and_sync() {
    let res = Result::<u8, Panic>::Success(1).map(|_| -> u8 { panic!("x") });
    assert_send_sync(&res);

    let res = Result::<u8, AppError>::Success(1).map(|_| -> u8 { panic!("y") });
    assert_send_sync(&res);
}

#[test]
fn captured_results_are_shared_between_threads() {
    let res = Arc::new(
        Result::<u8, Panic>::Success(1).map(|_| -> u8 { panic!("shared") }),
    );
    let readers = (0..4)
        .map(|_| {
            let res = Arc::clone(&res);
            thread::spawn(move || {
                let caught = res.as_error().map(|e| e.message().to_owned());
                (res.is_error(), caught)
            })
        })
        .collect::<Vec<_>>();
    for reader in readers {
        let (is_error, message) =
            reader.join().expect("reader thread panicked");
        assert!(is_error);
        assert_eq!(message.as_deref(), Some("shared"));
    }
}

#[test]
fn captured_panic_converts_into_anyhow() {
    fn run() -> anyhow::Result<u8> {
        let res =
            Result::<u8, Panic>::Success(1).map(|_| -> u8 { panic!("stop") });
        Ok(res.into_std()?)
    }

    let err = run().unwrap_err();
    assert_eq!(err.to_string(), "stop");
    assert!(err.downcast_ref::<Panic>().is_some());
}

#[test]
fn of_converts_panic_into_caller_error_type() {
    let payload = panic::catch_unwind(|| panic!("raised")).unwrap_err();
    let res = Result::<u8, AppError>::of(Panic::from_payload(payload));
    match res {
        Result::Error(AppError::Panicked(caught)) => {
            assert_eq!(caught.message(), "raised");
        }
        Result::Success(_) => panic!("expected an error"),
    }
}

#[test]
fn and_then_may_return_a_panic_value() {
    let res: Result<u8, AppError> = Result::<u8, AppError>::Success(1)
        .and_then(|_| Panic::from_payload(Box::new("handed back")));
    assert!(matches!(
        res,
        Result::Error(AppError::Panicked(ref caught))
            if caught.message() == "handed back"
    ));
}
