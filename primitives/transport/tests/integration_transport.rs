//! Integration tests for the runtime boundary.
//!
//! Generated bindings are exercised end to end in `quill-codegen`'s
//! `test_generated_bindings`; these cover the seam itself.

use std::sync::{Arc, Mutex};

use transport::{codec, Dispatch, Outcome, Params, TransportError};

enum Reply {
    Body(&'static str),
    Fail,
}

struct Recorder {
    reply: Reply,
    seen: Mutex<Vec<(String, Params)>>,
}

impl Recorder {
    fn new(reply: Reply) -> Self { Self { reply, seen: Mutex::new(Vec::new()) } }

    fn calls(&self) -> Vec<(String, Params)> { self.seen.lock().expect("lock").clone() }
}

#[async_trait::async_trait]
impl Dispatch for Recorder {
    async fn dispatch(
        &self,
        method: &str,
        params: Params,
        _payload: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, TransportError> {
        self.seen.lock().expect("lock").push((method.to_string(), params));
        match self.reply {
            Reply::Body(body) => Ok(body.as_bytes().to_vec()),
            Reply::Fail => Err(TransportError::dispatch(method, "connection refused")),
        }
    }
}

async fn call<T: serde::de::DeserializeOwned + Default>(
    client: &dyn Dispatch,
    method: &str,
    params: Params,
) -> Outcome<T> {
    let raw = match client.dispatch(method, params, None).await {
        Ok(raw) => raw,
        Err(err) => return Outcome::failure(T::default(), err),
    };
    match codec::decode::<T>(&raw) {
        Ok(value) => Outcome::success(value),
        Err(err) => Outcome::failure(T::default(), err),
    }
}

#[tokio::test]
async fn params_reach_the_dispatcher_unchanged() {
    let recorder = Recorder::new(Reply::Body("7"));
    let mut params = Params::new();
    params.add("chat_id", "42");
    params.add("entities", codec::encode_param("entities", &["bold"]).expect("encodes"));

    let outcome: Outcome<i64> = call(&recorder, "sendMessage", params).await;
    assert_eq!(outcome.into_result().expect("call succeeds"), 7);

    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "sendMessage");
    assert_eq!(calls[0].1.get("chat_id"), Some("42"));
    assert_eq!(calls[0].1.get("entities"), Some(r#"["bold"]"#));
}

#[tokio::test]
async fn failures_carry_the_fallback_value() {
    let failing = Recorder::new(Reply::Fail);
    let (value, error) = call::<Vec<String>>(&failing, "getUpdates", Params::new()).await.into_parts();
    assert!(value.is_empty());
    assert!(matches!(error, Some(TransportError::Dispatch { method, .. }) if method == "getUpdates"));

    let garbage = Recorder::new(Reply::Body("<html>bad gateway</html>"));
    let outcome = call::<bool>(&garbage, "close", Params::new()).await;
    assert!(!outcome.value);
    assert!(matches!(outcome.error, Some(TransportError::Decode(_))));
}

#[tokio::test]
async fn shared_dispatcher_forwards_through_arc() {
    let recorder = Arc::new(Recorder::new(Reply::Body("true")));
    let raw = recorder.dispatch("close", Params::new(), None).await.expect("dispatch succeeds");
    let closed: bool = codec::decode(&raw).expect("decodes");
    assert!(closed);

    let shared: Arc<dyn Dispatch> = recorder.clone();
    let outcome = call::<bool>(&shared, "logOut", Params::new()).await;
    assert!(outcome.value);
    assert_eq!(recorder.calls().len(), 2);
}
