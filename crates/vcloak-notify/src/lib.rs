//! vcloak Notifications
//!
//! Turns failed API calls into something the user sees:
//!
//! | Match                 | Notice                     | Navigation            |
//! |-----------------------|----------------------------|-----------------------|
//! | 401 / "Unauthorized"  | session expired            | login page after 2s   |
//! | 403 / "Forbidden"     | permission denied          | none                  |
//! | 404                   | not found                  | none                  |
//! | 500                   | server error               | none                  |
//! | anything else         | raw message or fallback    | none                  |
//!
//! Notices expire on their own after 5 seconds unless dismissed first.

mod classifier;
mod handler;
mod notice;

pub use classifier::{classify, ClassifiedError, ErrorKind, FALLBACK_MESSAGE};
pub use handler::{ErrorHandler, DEFAULT_REDIRECT_DELAY};
pub use notice::{Notice, NoticeLevel, NotificationCenter, DEFAULT_NOTICE_DURATION};
