pub mod culture_extractor;
pub mod job_approver;
pub mod job_grouper;
pub mod job_submitter;
pub mod node_materializer;
pub mod scope_resolver;
pub mod service;

pub use culture_extractor::{extract_cultures, CultureFilter};
pub use job_approver::JobApprover;
pub use job_grouper::{group_by_culture, job_name, CultureGroup, JobGrouper};
pub use job_submitter::JobSubmitter;
pub use node_materializer::NodeMaterializer;
pub use scope_resolver::ScopeResolver;
pub use service::{
    AutomaticTranslationService, TranslationCollaborators, TranslationRequest,
    TranslationRunReport,
};
