/// Domain entities for translation sets, nodes and jobs
///
/// Sets describe which content is kept in sync across cultures, nodes are the
/// per-culture units of work and jobs batch nodes for a provider.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{
    ChangeType, ContentId, Culture, JobId, NodeId, NodeStatus, ProviderKey, SetId, UserId,
};

/// Destination of a translation set in one target culture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSite {
    pub culture: Culture,
    pub root_path: String,
}

impl TargetSite {
    pub fn new(culture: Culture, root_path: impl Into<String>) -> Self {
        Self {
            culture,
            root_path: root_path.into(),
        }
    }
}

/// Scope of content under a root path kept in sync across cultures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSet {
    pub id: SetId,
    pub name: String,
    pub root_path: String,
    /// Source culture of the set
    pub culture: Culture,
    pub sites: Vec<TargetSite>,
}

impl TranslationSet {
    /// Whether a content path lives under this set's root
    ///
    /// Paths are comma separated ids (`-1,1050,1073`), so containment is
    /// checked on whole segments.
    pub fn contains_path(&self, path: &str) -> bool {
        let root: Vec<&str> = self.root_path.split(',').collect();
        let candidate: Vec<&str> = path.split(',').collect();
        candidate.len() >= root.len() && candidate[..root.len()] == root[..]
    }
}

/// Options the node service uses when creating nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeCreationOptions {
    pub change_type: ChangeType,
    pub default_node_status: NodeStatus,
    pub include_name_change: bool,
}

impl NodeCreationOptions {
    /// Always retranslate, open status, names included
    pub fn forced() -> Self {
        Self {
            change_type: ChangeType::Force,
            default_node_status: NodeStatus::Open,
            include_name_change: true,
        }
    }
}

/// One pending per-culture translation unit for one content item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationNode {
    pub id: NodeId,
    pub set_id: SetId,
    pub content_id: ContentId,
    /// Name of the source content item the node was created from
    pub master_node_name: String,
    /// Target culture
    pub culture: Culture,
    pub status: NodeStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobOptions {
    /// Approve automatically once the provider returns results
    pub auto_approve: bool,
}

impl JobOptions {
    pub fn auto_approved() -> Self {
        Self { auto_approve: true }
    }
}

/// Job status through the automatic pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Created,
    NodesLoaded,
    Submitted,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Created => write!(f, "created"),
            JobStatus::NodesLoaded => write!(f, "nodes_loaded"),
            JobStatus::Submitted => write!(f, "submitted"),
        }
    }
}

impl std::str::FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "created" => Ok(JobStatus::Created),
            "nodes_loaded" => Ok(JobStatus::NodesLoaded),
            "submitted" => Ok(JobStatus::Submitted),
            _ => Err(format!("Invalid job status: {}", s)),
        }
    }
}

/// Job to be created by the job service
#[derive(Debug, Clone, PartialEq)]
pub struct NewTranslationJob {
    pub name: String,
    pub nodes: Vec<TranslationNode>,
    /// Opaque detail payload handed to the provider
    pub payload: serde_json::Value,
    /// `None` when no authenticated user started the run
    pub initiator: Option<UserId>,
    pub options: JobOptions,
    /// Correlates every job spawned by the same triggering event
    pub group_id: Uuid,
}

/// Batch of nodes sharing one target culture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationJob {
    pub id: JobId,
    pub name: String,
    pub culture: Culture,
    pub provider_key: ProviderKey,
    pub group_id: Uuid,
    pub initiator: Option<UserId>,
    pub options: JobOptions,
    /// May be lazily populated until the job service loads them
    pub nodes: Vec<TranslationNode>,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
}

impl TranslationJob {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn mark_nodes_loaded(&mut self) {
        self.status = JobStatus::NodesLoaded;
    }

    pub fn mark_submitted(&mut self) {
        self.status = JobStatus::Submitted;
    }
}

/// Outcome reported by the job service for a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub success: bool,
    pub error: Option<String>,
}

impl SubmitResult {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Options for the manual approval path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalOptions {
    pub approve: bool,
    /// Load and approve every node of the job
    pub approve_all_nodes: bool,
    pub check: bool,
    pub publish: bool,
    pub user: Option<UserId>,
}

impl ApprovalOptions {
    pub fn approve_all(user: Option<UserId>) -> Self {
        Self {
            approve: true,
            approve_all_nodes: true,
            check: true,
            publish: true,
            user,
        }
    }
}
