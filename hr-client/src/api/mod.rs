//! Resource accessors
//!
//! One accessor per backend resource, borrowed from [`HrClient`]:
//!
//! ```no_run
//! # use hr_client::{ClientConfig, HrClient};
//! # use shared::models::{TaskQuery, TaskStatus};
//! # async fn example() -> Result<(), hr_client::ClientError> {
//! let client = HrClient::new(&ClientConfig::from_env())?;
//! let tasks = client.tasks().list(&TaskQuery::default()).await?;
//! if let Some(task) = tasks.items().first() {
//!     client.tasks().update_status(&task.id, TaskStatus::Done).await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`HrClient`]: crate::HrClient

pub mod auth;
pub mod comments;
pub mod departments;
pub mod documents;
pub mod employees;
pub mod files;
pub mod positions;
pub mod requests;
pub mod statistics;
pub mod tasks;

pub use auth::AuthApi;
pub use comments::{CommentApi, Upload};
pub use departments::DepartmentApi;
pub use documents::DocumentApi;
pub use employees::EmployeeApi;
pub use files::{Disposition, FileApi, FileContent};
pub use positions::PositionApi;
pub use requests::RequestApi;
pub use statistics::StatisticsApi;
pub use tasks::TaskApi;
