use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::components::notification::Notice;
use crate::config::SITE_NAME;

pub const SHARE_TITLE: &str = "Maxcare Hospitals Health Article";
pub const COPIED: &str = "Article link copied to clipboard!";
pub const UNSUPPORTED: &str = "Sharing not supported on this device";

/// Shape handed to `navigator.share`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareRequest {
    pub fn for_post(post_title: &str, url: &str) -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: format!("Check out this health article: {} - {}", post_title.trim(), SITE_NAME),
            url: url.to_string(),
        }
    }

    pub fn clipboard_text(&self) -> String {
        format!("{} - {}", self.text, self.url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareMethod {
    Native,
    Clipboard,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub native_share: bool,
    pub clipboard: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("share rejected: {0}")]
    Rejected(String),
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}

/// Available methods, most preferred first.
pub fn attempt_order(caps: Capabilities) -> Vec<ShareMethod> {
    [(ShareMethod::Native, caps.native_share), (ShareMethod::Clipboard, caps.clipboard)]
        .into_iter()
        .filter_map(|(method, available)| available.then_some(method))
        .collect()
}

#[allow(async_fn_in_trait)]
pub trait ShareBackend {
    fn capabilities(&self) -> Capabilities;
    async fn native_share(&self, request: &ShareRequest) -> Result<(), ShareError>;
    async fn copy_text(&self, text: &str) -> Result<(), ShareError>;
}

/// Runs the first available method; the result decides what, if anything, to tell the user.
pub async fn share<B: ShareBackend>(backend: &B, request: &ShareRequest) -> Option<Notice> {
    let Some(method) = attempt_order(backend.capabilities()).into_iter().next() else {
        return Some(Notice::info(UNSUPPORTED));
    };
    match method {
        ShareMethod::Native => {
            // Cancelling the share sheet also lands here.
            if let Err(e) = backend.native_share(request).await {
                debug!("Error sharing: {}", e);
            }
            None
        }
        ShareMethod::Clipboard => match backend.copy_text(&request.clipboard_text()).await {
            Ok(()) => Some(Notice::success(COPIED)),
            Err(e) => {
                debug!("{}", e);
                Some(Notice::info(UNSUPPORTED))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeBackend {
        caps: Capabilities,
        native_fails: bool,
        copy_fails: bool,
        calls: RefCell<Vec<String>>,
    }

    impl ShareBackend for FakeBackend {
        fn capabilities(&self) -> Capabilities {
            self.caps
        }

        async fn native_share(&self, request: &ShareRequest) -> Result<(), ShareError> {
            self.calls.borrow_mut().push(format!("share:{}", request.text));
            if self.native_fails {
                Err(ShareError::Rejected("AbortError".into()))
            } else {
                Ok(())
            }
        }

        async fn copy_text(&self, text: &str) -> Result<(), ShareError> {
            self.calls.borrow_mut().push(format!("copy:{}", text));
            if self.copy_fails {
                Err(ShareError::Clipboard("NotAllowedError".into()))
            } else {
                Ok(())
            }
        }
    }

    fn request() -> ShareRequest {
        ShareRequest::for_post(" Managing Diabetes ", "https://maxcare.example/#blog")
    }

    #[test]
    fn builds_share_text_from_post_title() {
        let req = request();
        assert_eq!(req.title, SHARE_TITLE);
        assert_eq!(req.text, "Check out this health article: Managing Diabetes - Maxcare Hospitals");
        assert_eq!(
            req.clipboard_text(),
            "Check out this health article: Managing Diabetes - Maxcare Hospitals - https://maxcare.example/#blog"
        );
    }

    #[test]
    fn native_share_preferred_over_clipboard() {
        let both = Capabilities { native_share: true, clipboard: true };
        assert_eq!(attempt_order(both), vec![ShareMethod::Native, ShareMethod::Clipboard]);
        assert!(attempt_order(Capabilities::default()).is_empty());

        let backend = FakeBackend { caps: both, ..Default::default() };
        assert_eq!(block_on(share(&backend, &request())), None);
        let calls = backend.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].starts_with("share:"));
    }

    #[test]
    fn native_rejection_is_swallowed() {
        let backend = FakeBackend {
            caps: Capabilities { native_share: true, clipboard: true },
            native_fails: true,
            ..Default::default()
        };
        assert_eq!(block_on(share(&backend, &request())), None);
        assert_eq!(backend.calls.borrow().len(), 1);
    }

    #[test]
    fn clipboard_fallback_confirms_copy() {
        let backend = FakeBackend {
            caps: Capabilities { native_share: false, clipboard: true },
            ..Default::default()
        };
        assert_eq!(block_on(share(&backend, &request())), Some(Notice::success(COPIED)));
        assert!(backend.calls.borrow()[0].ends_with("https://maxcare.example/#blog"));
    }

    #[test]
    fn clipboard_failure_reports_unsupported() {
        let backend = FakeBackend {
            caps: Capabilities { native_share: false, clipboard: true },
            copy_fails: true,
            ..Default::default()
        };
        assert_eq!(block_on(share(&backend, &request())), Some(Notice::info(UNSUPPORTED)));
    }

    #[test]
    fn no_capability_reports_unsupported() {
        let backend = FakeBackend::default();
        assert_eq!(block_on(share(&backend, &request())), Some(Notice::info(UNSUPPORTED)));
        assert!(backend.calls.borrow().is_empty());
    }
}
