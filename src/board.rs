//! Board Orchestration
//!
//! Runs the goals and timeline pipelines against a [`Source`] and mounts
//! their output into a [`Document`].
//!
//! The two fetches run concurrently. Each pipeline succeeds or fails on its
//! own: a missing file or container only affects its own section, and the
//! outcome of both is returned as a [`RenderReport`].

use std::sync::Arc;
use std::time::Duration;

use crate::config::{BoardConfig, Config, PageConfig};
use crate::dom::{Document, Element};
use crate::loader::{
    load_goals, load_timeline, Event, FileSource, Goal, HttpSource, LoadResult, Source,
};
use crate::render::{
    append_cells_to_grid, append_rows_to_table, convert_timeline_to_table_rows, GoalRenderer,
    RenderError, RenderResult,
};

/// Result of one rendering pipeline
#[derive(Debug)]
pub enum PipelineOutcome {
    /// Elements were appended to the container
    Rendered { count: usize },
    /// The pipeline was aborted; the section is empty or holds a placeholder
    Failed { error: RenderError },
}

impl PipelineOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, PipelineOutcome::Rendered { .. })
    }

    /// Number of appended elements, zero on failure
    pub fn count(&self) -> usize {
        match self {
            PipelineOutcome::Rendered { count } => *count,
            PipelineOutcome::Failed { .. } => 0,
        }
    }

    pub fn error(&self) -> Option<&RenderError> {
        match self {
            PipelineOutcome::Rendered { .. } => None,
            PipelineOutcome::Failed { error } => Some(error),
        }
    }
}

/// Outcome of both pipelines
#[derive(Debug)]
pub struct RenderReport {
    pub goals: PipelineOutcome,
    pub timeline: PipelineOutcome,
}

impl RenderReport {
    pub fn is_complete(&self) -> bool {
        self.goals.is_rendered() && self.timeline.is_rendered()
    }
}

/// The goal board: a source of CSV files plus rendering settings
pub struct Board {
    source: Arc<dyn Source>,
    config: BoardConfig,
    page: PageConfig,
    goal_renderer: GoalRenderer,
}

impl Board {
    pub fn new(source: Arc<dyn Source>, config: BoardConfig, page: PageConfig) -> Self {
        let goal_renderer = GoalRenderer::new(config.max_goals, config.image_prefix.clone());

        Self {
            source,
            config,
            page,
            goal_renderer,
        }
    }

    /// Build a board from the full configuration, choosing the source
    pub fn from_config(config: &Config) -> LoadResult<Self> {
        let source: Arc<dyn Source> = match &config.source.base_url {
            Some(base_url) => match config.source.request_timeout_secs {
                Some(secs) => Arc::new(HttpSource::with_timeout(
                    base_url.as_str(),
                    Duration::from_secs(secs),
                )?),
                None => Arc::new(HttpSource::new(base_url.as_str())),
            },
            None => Arc::new(FileSource::new(&config.source.root_dir)),
        };

        tracing::info!(
            source = source.kind(),
            goals = %config.board.goals_file,
            updates = %config.board.updates_file,
            "Board configured"
        );

        Ok(Self::new(source, config.board.clone(), config.page.clone()))
    }

    pub fn source_kind(&self) -> &'static str {
        self.source.kind()
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub async fn load_goals(&self) -> LoadResult<Vec<Goal>> {
        load_goals(self.source.as_ref(), &self.config.goals_file).await
    }

    pub async fn load_timeline(&self) -> LoadResult<Vec<Event>> {
        load_timeline(self.source.as_ref(), &self.config.updates_file).await
    }

    /// An empty host page with the configured mount points
    pub fn new_document(&self) -> Document {
        Document::board_page(&self.page, &self.config.grid_id, &self.config.events_id)
    }

    /// Render goals into the document's grid container
    pub fn mount_goals(&self, doc: &mut Document, goals: &[Goal]) -> RenderResult<usize> {
        let grid = doc
            .element_by_id_mut(&self.config.grid_id)
            .ok_or_else(|| RenderError::MissingContainer(self.config.grid_id.clone()))?;

        let cells = self.goal_renderer.convert_goals_to_grid_cells(goals);
        let count = cells.len();
        append_cells_to_grid(grid, cells);

        Ok(count)
    }

    /// Render events into the document's table body
    pub fn mount_timeline(&self, doc: &mut Document, events: &[Event]) -> RenderResult<usize> {
        let table_body = doc
            .element_by_id_mut(&self.config.events_id)
            .ok_or_else(|| RenderError::MissingContainer(self.config.events_id.clone()))?;

        let rows = convert_timeline_to_table_rows(events);
        let count = rows.len();
        append_rows_to_table(table_body, rows);

        Ok(count)
    }

    /// Load both data sets concurrently and mount them into `doc`
    pub async fn render_into(&self, doc: &mut Document) -> RenderReport {
        let (goals, events) = tokio::join!(self.load_goals(), self.load_timeline());

        let goals_result = match goals {
            Ok(goals) => self.mount_goals(doc, &goals),
            Err(e) => Err(e.into()),
        };
        let goals = self.settle(doc, "goals", &self.config.grid_id, goals_result);

        let timeline_result = match events {
            Ok(events) => self.mount_timeline(doc, &events),
            Err(e) => Err(e.into()),
        };
        let timeline = self.settle(doc, "timeline", &self.config.events_id, timeline_result);

        RenderReport { goals, timeline }
    }

    /// Render a fresh page
    pub async fn render_page(&self) -> (Document, RenderReport) {
        let mut doc = self.new_document();
        let report = self.render_into(&mut doc).await;
        (doc, report)
    }

    fn settle(
        &self,
        doc: &mut Document,
        pipeline: &str,
        container_id: &str,
        result: RenderResult<usize>,
    ) -> PipelineOutcome {
        match result {
            Ok(count) => {
                tracing::debug!(pipeline, count, "Pipeline rendered");
                PipelineOutcome::Rendered { count }
            }
            Err(error) => {
                tracing::warn!(pipeline, error = %error, "Pipeline failed");

                if self.config.show_errors {
                    if let Some(container) = doc.element_by_id_mut(container_id) {
                        let element = placeholder(container.tag(), pipeline);
                        container.append(element);
                    }
                }

                PipelineOutcome::Failed { error }
            }
        }
    }
}

/// Error placeholder that is valid inside the given container
fn placeholder(container_tag: &str, pipeline: &str) -> Element {
    let message = format!("Could not load {}.", pipeline);

    match container_tag {
        "tbody" | "thead" | "table" => Element::new("tr").class("load-error").child(
            Element::new("td").attr("colspan", "2").text(message),
        ),
        _ => Element::new("p").class("load-error").text(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoadError;
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// In-memory source; unknown paths behave like a 404
    struct MemorySource {
        files: HashMap<String, String>,
    }

    impl MemorySource {
        fn new(files: &[(&str, &str)]) -> Arc<Self> {
            Arc::new(Self {
                files: files
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            })
        }
    }

    #[async_trait]
    impl Source for MemorySource {
        fn kind(&self) -> &'static str {
            "memory"
        }

        async fn fetch_text(&self, path: &str) -> LoadResult<String> {
            self.files.get(path).cloned().ok_or_else(|| LoadError::Status {
                url: path.to_string(),
                status: 404,
            })
        }
    }

    fn board(source: Arc<MemorySource>, config: BoardConfig) -> Board {
        Board::new(source, config, PageConfig::default())
    }

    #[tokio::test]
    async fn test_renders_both_sections() {
        let source = MemorySource::new(&[
            ("goals.csv", "h1,h2,h3\nA,b.png,true"),
            ("updates.csv", "h1,h2\nStarted,2024-01-01\nEnded,2024-02-01"),
        ]);
        let board = board(source, BoardConfig::default());

        let (doc, report) = board.render_page().await;

        assert!(report.is_complete());
        assert_eq!(report.goals.count(), 1);
        assert_eq!(report.timeline.count(), 2);

        let grid = doc.element_by_id("grid").unwrap();
        let cell = &grid.children()[0];
        assert_eq!(cell.attribute("class"), Some("cell done"));
        assert_eq!(cell.children()[0].attribute("src"), Some("assets/images/b.png"));
        assert_eq!(cell.children()[0].attribute("alt"), Some("A"));

        let events = doc.element_by_id("events").unwrap();
        assert_eq!(events.children().len(), 2);
        assert_eq!(events.children()[1].children()[0].text_content(), "Ended");
        assert_eq!(events.children()[1].children()[1].text_content(), "2024-02-01");
    }

    #[tokio::test]
    async fn test_header_never_rendered() {
        let source = MemorySource::new(&[
            ("goals.csv", "HeaderGoal,header.png,true\nA,a.png,false"),
            ("updates.csv", "HeaderEvent,HeaderTime\nStarted,2024-01-01"),
        ]);
        let board = board(source, BoardConfig::default());

        let (doc, _) = board.render_page().await;
        let html = doc.to_html();

        assert!(!html.contains("HeaderGoal"));
        assert!(!html.contains("header.png"));
        assert!(!html.contains("HeaderEvent"));
        assert!(html.contains("Started"));
    }

    #[tokio::test]
    async fn test_goal_limit_from_config() {
        let goals: String = std::iter::once("description,image,done".to_string())
            .chain((0..40).map(|i| format!("Goal {},{}.png,false", i, i)))
            .collect::<Vec<_>>()
            .join("\n");
        let source = MemorySource::new(&[("goals.csv", goals.as_str()), ("updates.csv", "h1,h2")]);

        let default_board = board(Arc::clone(&source), BoardConfig::default());
        let (doc, report) = default_board.render_page().await;
        assert_eq!(report.goals.count(), 25);
        assert_eq!(doc.element_by_id("grid").unwrap().children().len(), 25);
        assert_eq!(report.timeline.count(), 0);

        let small_board = board(
            source,
            BoardConfig {
                max_goals: 9,
                ..Default::default()
            },
        );
        let (_, report) = small_board.render_page().await;
        assert_eq!(report.goals.count(), 9);
    }

    #[tokio::test]
    async fn test_failed_pipeline_does_not_affect_other() {
        let source = MemorySource::new(&[("updates.csv", "h1,h2\nStarted,2024-01-01")]);
        let board = board(source, BoardConfig::default());

        let (doc, report) = board.render_page().await;

        assert!(matches!(
            report.goals.error(),
            Some(RenderError::Load(LoadError::Status { status: 404, .. }))
        ));
        assert!(report.timeline.is_rendered());
        assert_eq!(report.timeline.count(), 1);
        assert!(doc.element_by_id("grid").unwrap().children().is_empty());
    }

    #[tokio::test]
    async fn test_show_errors_placeholders() {
        let source = MemorySource::new(&[]);
        let board = board(
            source,
            BoardConfig {
                show_errors: true,
                ..Default::default()
            },
        );

        let (doc, report) = board.render_page().await;

        assert!(!report.goals.is_rendered());
        assert!(!report.timeline.is_rendered());

        let grid = doc.element_by_id("grid").unwrap();
        assert_eq!(grid.children()[0].tag(), "p");
        assert!(grid.children()[0].has_class("load-error"));

        let events = doc.element_by_id("events").unwrap();
        assert_eq!(events.children()[0].tag(), "tr");
        assert_eq!(events.children()[0].text_content(), "Could not load timeline.");
    }

    #[tokio::test]
    async fn test_missing_containers() {
        let source = MemorySource::new(&[
            ("goals.csv", "h1,h2,h3\nA,b.png,true"),
            ("updates.csv", "h1,h2\nStarted,2024-01-01"),
        ]);
        let board = board(source, BoardConfig::default());
        let mut doc = Document::new(Element::new("html").child(Element::new("body")));

        let report = board.render_into(&mut doc).await;

        assert!(matches!(
            report.goals.error(),
            Some(RenderError::MissingContainer(id)) if id == "grid"
        ));
        assert!(matches!(
            report.timeline.error(),
            Some(RenderError::MissingContainer(id)) if id == "events"
        ));
    }

    #[test]
    fn test_from_config_picks_source() {
        let mut config = Config::default();
        assert_eq!(Board::from_config(&config).unwrap().source_kind(), "file");

        config.source.base_url = Some("http://localhost:9/board".to_string());
        assert_eq!(Board::from_config(&config).unwrap().source_kind(), "http");

        config.source.request_timeout_secs = Some(5);
        assert_eq!(Board::from_config(&config).unwrap().source_kind(), "http");
    }
}
