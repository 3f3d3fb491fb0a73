pub mod club_manager;
pub mod event_manager;
pub mod notification;
pub mod pipeline;
pub mod read_cache;
pub mod registration_manager;
pub mod row_action;

pub use club_manager::{ClubForm, ClubManager};
pub use event_manager::{EventForm, EventManager, EventView, SelectOption};
pub use notification::{Notification, Notifier, RecordingNotifier, Severity, TracingNotifier};
pub use pipeline::{PipelineState, SubmitOutcome};
pub use read_cache::{CacheResult, ReadCache, Snapshot};
pub use registration_manager::{RegistrationForm, RegistrationManager, RegistrationView};
pub use row_action::RowAction;
