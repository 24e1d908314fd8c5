use futures::StreamExt;

use trawl_core::models::invocation::TraceEntry;

use crate::error::RemoteFailure;
use crate::runtime::{CompletionEvent, CompletionStream};

/// Text and trace collected from a completion stream.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Drained {
    pub text: String,
    pub trace: Vec<TraceEntry>,
}

/// Read a completion stream to the end.
///
/// Chunk bytes are concatenated in arrival order and decoded once, so a
/// multi-byte character split across chunks survives. Trace entries keep
/// their arrival order. No stream yields empty output. The first failure
/// aborts the drain.
pub async fn drain(completion: Option<CompletionStream>) -> Result<Drained, RemoteFailure> {
    let Some(mut completion) = completion else {
        return Ok(Drained::default());
    };

    let mut bytes = Vec::new();
    let mut trace = Vec::new();

    while let Some(event) = completion.next().await {
        match event? {
            CompletionEvent::Chunk(chunk) => bytes.extend_from_slice(&chunk),
            CompletionEvent::Trace(entry) => trace.push(entry),
            CompletionEvent::Other => {}
        }
    }

    Ok(Drained {
        text: String::from_utf8_lossy(&bytes).into_owned(),
        trace,
    })
}
