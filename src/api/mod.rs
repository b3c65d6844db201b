// ==========================================
// 试卷组卷系统 - API 层
// ==========================================
// 职责: 面向调用方（CLI / 渲染方）的请求入口
// ==========================================

pub mod error;
pub mod outline;
pub mod paper_api;
pub mod validator;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use outline::render_outline;
pub use paper_api::PaperApi;
pub use validator::{collect_slot_arguments, parse_slot_argument, SlotSpecValidator};
