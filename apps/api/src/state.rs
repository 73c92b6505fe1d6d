use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::analysis::analyzer::{BasicAnalyzer, CvAnalyzer, FallbackAnalyzer, LlmAnalyzer};
use crate::config::Config;
use crate::courses::recommender::{
    CourseRecommender, FallbackRecommender, LlmRecommender, StaticRecommender,
};
use crate::cover_letter::writer::{CoverLetterWriter, FallbackWriter, LlmWriter, TemplateWriter};
use crate::llm_client::{self, LlmClient};
use crate::roles::RoleCatalog;
use crate::segmenter::{ListOverride, NoisePattern, SegmenterConfig};

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything behind an `Arc` is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub segmenter: Arc<SegmenterConfig>,
    pub roles: Arc<RoleCatalog>,
    /// Pluggable analyzer. `BasicAnalyzer` without an API key, otherwise the
    /// LLM analyzer wrapped in a fallback to `BasicAnalyzer`.
    pub analyzer: Arc<dyn CvAnalyzer>,
    /// Same selection as `analyzer`: template letters unless a key is set.
    pub letters: Arc<dyn CoverLetterWriter>,
    pub courses: Arc<dyn CourseRecommender>,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self> {
        let segmenter = build_segmenter(&config.extra_noise_patterns)?;

        let roles = match &config.role_catalog_path {
            Some(path) => {
                let catalog = RoleCatalog::from_file(path)
                    .with_context(|| format!("Failed to load ROLE_CATALOG_PATH {}", path.display()))?;
                info!("Role catalog loaded from {} ({} roles)", path.display(), catalog.len());
                catalog
            }
            None => RoleCatalog::default(),
        };

        let llm = config
            .gemini_api_key
            .as_ref()
            .map(|key| LlmClient::new(key.clone()))
            .transpose()
            .context("Failed to build LLM HTTP client")?;
        match &llm {
            Some(_) => info!("LLM backends enabled (model: {})", llm_client::MODEL),
            None => info!("GEMINI_API_KEY not set, using basic analyzer, template letters and static courses"),
        }

        let analyzer: Arc<dyn CvAnalyzer> = match &llm {
            Some(llm) => Arc::new(FallbackAnalyzer::new(Arc::new(LlmAnalyzer(llm.clone())))),
            None => Arc::new(BasicAnalyzer),
        };
        let letters: Arc<dyn CoverLetterWriter> = match &llm {
            Some(llm) => Arc::new(FallbackWriter::new(Arc::new(LlmWriter(llm.clone())))),
            None => Arc::new(TemplateWriter),
        };
        let courses: Arc<dyn CourseRecommender> = match llm {
            Some(llm) => Arc::new(FallbackRecommender::new(Arc::new(LlmRecommender(llm)))),
            None => Arc::new(StaticRecommender),
        };

        Ok(Self {
            config,
            segmenter: Arc::new(segmenter),
            roles: Arc::new(roles),
            analyzer,
            letters,
            courses,
        })
    }
}

fn build_segmenter(extra_noise: &[String]) -> Result<SegmenterConfig> {
    if extra_noise.is_empty() {
        return Ok(SegmenterConfig::default());
    }
    let patterns = extra_noise
        .iter()
        .enumerate()
        .map(|(i, pattern)| {
            NoisePattern::new(format!("custom-{}", i + 1), pattern)
                .with_context(|| format!("Invalid NOISE_PATTERNS entry '{pattern}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(SegmenterConfig::from_overrides(
        ListOverride::Extend(patterns),
        ListOverride::Default,
    ))
}
