mod project;
mod storage;
mod task;

pub use project::Timeline;
pub use storage::{get_timeline_path, load_timeline, save_timeline};
pub use task::{Priority, Task, TaskDraft, TaskStatus};
