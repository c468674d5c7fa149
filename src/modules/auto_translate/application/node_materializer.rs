use crate::log_debug;
use crate::modules::content::ContentItem;
use crate::modules::translation::domain::{
    culture_text_eq, NodeCreationOptions, NodeService, TargetSite, TranslationNode,
    TranslationSet,
};
use crate::shared::errors::AppResult;
use std::sync::Arc;

/// Expands a set and its changed content into per-site translation nodes
pub struct NodeMaterializer {
    node_service: Arc<dyn NodeService>,
    excluded_cultures: Vec<String>,
}

impl NodeMaterializer {
    pub fn new(node_service: Arc<dyn NodeService>, excluded_cultures: Vec<String>) -> Self {
        Self {
            node_service,
            excluded_cultures,
        }
    }

    /// Target sites of the set minus excluded cultures (matched on display name)
    pub fn target_sites(&self, set: &TranslationSet) -> Vec<TargetSite> {
        set.sites
            .iter()
            .filter(|site| {
                !self
                    .excluded_cultures
                    .iter()
                    .any(|excluded| culture_text_eq(excluded, &site.culture.display_name))
            })
            .cloned()
            .collect()
    }

    /// Nodes for every item against the remaining target sites
    ///
    /// Nodes are always forced, so unchanged text is retranslated too.
    pub async fn create_nodes(
        &self,
        set: &TranslationSet,
        items: &[ContentItem],
    ) -> AppResult<Vec<TranslationNode>> {
        let options = NodeCreationOptions::forced();
        let sites = self.target_sites(set);

        let mut nodes = Vec::new();
        for item in items {
            nodes.extend(
                self.node_service
                    .create_nodes(set, item, options, &sites)
                    .await?,
            );
        }

        log_debug!(
            "Created {} nodes for set {} across {} target sites",
            nodes.len(),
            set.id,
            sites.len()
        );

        Ok(nodes)
    }
}
