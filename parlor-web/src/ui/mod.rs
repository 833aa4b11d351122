mod app;
pub use app::{App, AppMsg};

mod avatar;
pub use avatar::Avatar;

mod comment_node;
pub use comment_node::{CommentNode, MenuState};

mod comment_thread;
pub use comment_thread::CommentThread;

mod verified_badge;
pub use verified_badge::VerifiedBadge;
