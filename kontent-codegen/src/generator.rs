//! Generation orchestrator: fetch, render, write.

use std::{error::Error as StdError, path::PathBuf};

use kontent_core::{ContentTypeSchema, File, Result, SchemaSource};

use crate::{
    config::GenerationConfig,
    format::Formatter,
    output::Output,
    planner::plan_filename,
    renderer::{ModelRenderer, SkippedElement},
};

/// Last message of every run, successful or not.
pub const FINISHED_MESSAGE: &str = "Model generation finished";

/// One generated model, in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModel {
    pub filename: String,
    pub path: PathBuf,
    pub type_name: String,
    pub display_name: String,
    pub content: String,
    pub skipped: Vec<SkippedElement>,
}

/// What a run produced.
#[derive(Debug, Default)]
pub struct GenerationSummary {
    pub models: Vec<GeneratedModel>,
    /// Whether files were only previewed
    pub dry_run: bool,
}

impl GenerationSummary {
    pub fn skipped_elements(&self) -> usize {
        self.models.iter().map(|m| m.skipped.len()).sum()
    }
}

/// Runs a generation pass over every content type of a [`SchemaSource`].
///
/// Types are processed in source order and files written as they are
/// rendered. The first error stops the run; files written before it stay
/// on disk.
pub struct Generator<'a> {
    config: &'a GenerationConfig,
    renderer: ModelRenderer<'a>,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self {
            config,
            renderer: ModelRenderer::new(config),
        }
    }

    /// Use a custom renderer (fixed timestamp, custom formatter, ...).
    pub fn with_renderer(mut self, renderer: ModelRenderer<'a>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_formatter(mut self, formatter: impl Formatter + Send + Sync + 'a) -> Self {
        self.renderer = self.renderer.with_formatter(formatter);
        self
    }

    /// Fetch all content types and generate a model file for each.
    ///
    /// The finished message is reported on every path. On failure an error
    /// line comes first and the error is returned unchanged.
    pub async fn run<S: SchemaSource>(
        &self,
        source: &S,
        out: &mut dyn Output,
    ) -> Result<GenerationSummary> {
        let result = self.run_inner(source, out).await;

        if let Err(err) = &result {
            out.error(&describe(err));
        }
        out.info(FINISHED_MESSAGE);

        result
    }

    async fn run_inner<S: SchemaSource>(
        &self,
        source: &S,
        out: &mut dyn Output,
    ) -> Result<GenerationSummary> {
        let types = source.fetch_types().await?;
        tracing::debug!(count = types.len(), "fetched content types");

        self.report_resolvers(out);

        let mut summary = GenerationSummary {
            models: Vec::with_capacity(types.len()),
            dry_run: self.config.dry_run,
        };

        for schema in &types {
            let model = self.generate_model(schema)?;

            for skipped in &model.skipped {
                out.warning(&format!(
                    "skipping element '{}' of content type '{}': unsupported kind '{}'",
                    skipped.codename, schema.codename, skipped.kind
                ));
            }

            if self.config.dry_run {
                out.divider(&model.filename);
                out.preformatted(&model.content);
            } else {
                File::new(&model.path, &model.content).write()?;
                out.added_item(&format!("{} ({})", model.filename, model.display_name));
            }

            summary.models.push(model);
        }

        Ok(summary)
    }

    /// Render and name one content type without touching the disk.
    pub fn generate_model(&self, schema: &ContentTypeSchema) -> Result<GeneratedModel> {
        let rendered = self.renderer.render(schema)?;
        let filename = plan_filename(schema, self.config.file_resolver.as_ref());

        Ok(GeneratedModel {
            path: self.config.output_dir.join(&filename),
            filename,
            type_name: rendered.type_name,
            display_name: schema.name.clone(),
            content: rendered.content,
            skipped: rendered.skipped,
        })
    }

    fn report_resolvers(&self, out: &mut dyn Output) {
        if let Some(resolver) = &self.config.element_resolver {
            out.info(&format!(
                "Using {} name resolver for content type elements",
                resolver
            ));
        }
        if let Some(resolver) = &self.config.file_resolver {
            out.info(&format!("Using {} name resolver for file names", resolver));
        }
    }
}

/// An error message followed by its sources, `: `-separated.
fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
