pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::{
    ApprovalOptions, JobOptions, JobStatus, NewTranslationJob, NodeCreationOptions, SubmitResult,
    TargetSite, TranslationJob, TranslationNode, TranslationSet,
};
pub use repositories::{
    ApprovalService, JobService, NodeService, ProviderRegistry, SecurityContext, SetRepository,
    TranslationProvider,
};
pub use value_objects::{
    culture_text_eq, ChangeType, ContentId, Culture, JobId, NodeId, NodeStatus, ProviderKey, SetId, UserId,
};
