use crate::decode::decode_or_default;
use crate::report::{AnalysisResult, LlamaAnalysis};

/// Token identifying one submission attempt. Responses carry the token they
/// were issued with, so a slow response from an abandoned attempt can be
/// told apart from the current one.
pub type RequestToken = u64;

/// Where the result overlay is in the submission lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub enum OverlayState {
    /// Overlay hidden, no submission in progress.
    Closed,
    /// Submission triggered, waiting on the analysis service. Entered
    /// synchronously before any async work resolves.
    Loading,
    /// Response arrived. Success payloads and the generic failure payload
    /// both land here; they differ only in content.
    Result(AnalysisResult),
}

/// Modal state machine driven by three events: submit invoked, response
/// arrived, user closed. Holds no memory of a previous result once closed.
#[derive(Clone, Debug, PartialEq)]
pub struct Presenter {
    state: OverlayState,
    token: RequestToken,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter {
    pub fn new() -> Self {
        Self {
            state: OverlayState::Closed,
            token: 0,
        }
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != OverlayState::Closed
    }

    /// User triggered a submission. Opens the overlay in its loading state
    /// and returns the token the eventual response must present. Invoking
    /// again while a request is in flight starts a fresh attempt; the older
    /// token goes stale and its response will be ignored.
    pub fn submit_invoked(&mut self) -> RequestToken {
        self.token += 1;
        self.state = OverlayState::Loading;
        self.token
    }

    /// A response arrived for the attempt identified by `token`. Stale
    /// tokens are dropped so a slow earlier request cannot overwrite the
    /// outcome of a newer one. Returns whether the state changed.
    pub fn response_arrived(&mut self, token: RequestToken, result: AnalysisResult) -> bool {
        if token != self.token {
            log::debug!("dropping stale analysis response (token {token})");
            return false;
        }
        self.state = OverlayState::Result(result);
        true
    }

    /// The submission was abandoned before any response could arrive
    /// (geolocation unavailable, fix denied, file unreadable). Returns the
    /// overlay to `Closed` so nothing is left spinning; the cause is only
    /// logged by the caller, never rendered.
    pub fn aborted(&mut self, token: RequestToken) -> bool {
        if token != self.token {
            return false;
        }
        self.state = OverlayState::Closed;
        true
    }

    /// User dismissed the overlay.
    pub fn closed(&mut self) {
        self.state = OverlayState::Closed;
    }
}

/// Pulls the recommendation list out of a result's nested `llama_analysis`
/// fragment. Absent or malformed fragments yield an empty list, which the
/// overlay renders as zero items rather than an error.
pub fn recommendations(result: &AnalysisResult) -> Vec<String> {
    let decoded: LlamaAnalysis = decode_or_default(result.llama_analysis.as_deref());
    decoded.recommendations.unwrap_or_default()
}
