use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    filter::{self, Listing},
    pet::SortOrder,
};
use crate::models::laboratory::{Analysis, AnalysisStatus};

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSortKey {
    #[default]
    RequestedAt,
    /// `alta` > `media` > `normal`
    Priority,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default, deserialize_with = "filter::selector")]
    pub status: Option<AnalysisStatus>,
    pub sort: Option<AnalysisSortKey>,
    /// Newest request and highest priority first by default
    pub order: Option<SortOrder>,
    #[serde(default)]
    pub preview: bool,
}

pub fn filter_analyses(analyses: Vec<Analysis>, query: &AnalysisQuery) -> Vec<Analysis> {
    analyses
        .into_iter()
        .filter(|a| {
            filter::matches_query(&query.search, &[&a.pet_name, &a.owner_name, &a.test_type])
                && filter::matches_selector(query.status.as_ref(), &a.status)
        })
        .collect()
}

pub fn sort_analyses(analyses: &mut [Analysis], key: AnalysisSortKey, order: SortOrder) {
    analyses.sort_by(|a, b| {
        let ordering = match key {
            AnalysisSortKey::RequestedAt => a.requested_at.cmp(&b.requested_at),
            AnalysisSortKey::Priority => a.priority.cmp(&b.priority),
        };
        order.apply(ordering)
    });
}

#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct LaboratoryStats {
    pub total: usize,
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    pub total_cost: Decimal,
}

pub fn laboratory_stats(analyses: &[Analysis]) -> LaboratoryStats {
    let count = |status: AnalysisStatus| analyses.iter().filter(|a| a.status == status).count();

    LaboratoryStats {
        total: analyses.len(),
        pending: count(AnalysisStatus::Pendiente),
        processing: count(AnalysisStatus::Procesando),
        completed: count(AnalysisStatus::Completado),
        total_cost: analyses.iter().map(|a| a.cost).sum(),
    }
}

#[derive(Debug, Serialize)]
pub struct LaboratoryPage {
    pub analyses: Listing<Analysis>,
    pub stats: LaboratoryStats,
}

pub fn build_laboratory_page(analyses: Vec<Analysis>, query: &AnalysisQuery) -> LaboratoryPage {
    let stats = laboratory_stats(&analyses);
    let mut filtered = filter_analyses(analyses, query);

    if let Some(key) = query.sort {
        sort_analyses(&mut filtered, key, query.order.unwrap_or(SortOrder::Desc));
    }

    LaboratoryPage {
        analyses: Listing::new(filtered, query.preview),
        stats,
    }
}
