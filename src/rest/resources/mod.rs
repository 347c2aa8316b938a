//! Stark Infra entity implementations.
//!
//! # Available Resources
//!
//! ## IssuingHolder Resource
//!
//! The people or companies cards are issued to, with their spending rules.
//!
//! ```rust,ignore
//! use stark_infra::rest::resources::{IssuingHolder, IssuingHolderListParams, IssuingHolderStatus};
//!
//! let params = IssuingHolderListParams {
//!     status: Some(IssuingHolderStatus::Active),
//!     limit: Some(50),
//!     ..Default::default()
//! };
//! let holders = IssuingHolder::query(&client, params)?.try_collect().await?;
//! ```
//!
//! ## CreditNote and CreditNote Log Resources
//!
//! Credit notes and the events recorded for them.
//!
//! ```rust,ignore
//! use stark_infra::rest::resources::credit_note::{CreditNoteLogType, Log, LogListParams};
//!
//! let params = LogListParams {
//!     types: Some(vec![CreditNoteLogType::Created]),
//!     ..Default::default()
//! };
//! let page = Log::page(&client, params, None).await?;
//! ```

pub mod credit_note;
mod issuing_holder;
mod issuing_rule;

pub use credit_note::{CreditNote, CreditNoteListParams, CreditNoteSigner, CreditNoteStatus};
pub use issuing_holder::{
    IssuingHolder, IssuingHolderListParams, IssuingHolderStatus, IssuingHolderUpdateParams,
};
pub use issuing_rule::{IssuingRule, IssuingRuleInterval};
