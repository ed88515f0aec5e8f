use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use kontent_codegen::{
    GenerationConfig, GenerationSummary, Generator, TerminalOutput, UnknownElementPolicy,
};
use kontent_core::{ElementResolver, FileResolver, NameCase};
use kontent_delivery::{DeliveryClient, FileSource};

use super::UnwrapOrExit;
use crate::config::{ConfigFile, DEFAULT_CONFIG};

#[derive(Args)]
pub struct GenerateCommand {
    /// Kontent.ai project (environment) id
    #[arg(long, env = "KONTENT_PROJECT_ID")]
    pub project_id: Option<String>,

    /// Secure access key for projects with secured delivery
    #[arg(long, env = "KONTENT_SECURE_ACCESS_KEY", hide_env_values = true)]
    pub secure_access_key: Option<String>,

    /// Delivery API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Naming convention for element properties (camelCase, PascalCase, snake_case)
    #[arg(long)]
    pub element_resolver: Option<NameCase>,

    /// Naming convention for file names (camelCase, PascalCase, snake_case)
    #[arg(long)]
    pub file_resolver: Option<NameCase>,

    /// Add a generation timestamp to every file header
    #[arg(long)]
    pub add_timestamp: bool,

    /// Fail on element kinds without a TypeScript mapping instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Read content types from a JSON file instead of the Delivery API
    #[arg(long, value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Output directory (defaults to current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to the configuration file (defaults to ./kontent-gen.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print generated models without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub async fn run(&self) -> Result<()> {
        let file = match &self.config {
            Some(path) => ConfigFile::load(path, true),
            None => ConfigFile::load(Path::new(DEFAULT_CONFIG), false),
        }
        .unwrap_or_exit();

        let config = self.generation_config(file);
        tracing::debug!(?config, "resolved configuration");

        let generator = Generator::new(&config);
        let mut out = TerminalOutput::new();
        let result = match &self.schema {
            Some(path) => generator.run(&FileSource::new(path), &mut out).await,
            None => generator.run(&delivery_client(&config), &mut out).await,
        };

        match result {
            Ok(summary) => {
                Self::print_summary(&summary);
                Ok(())
            }
            // Already reported by the generator
            Err(_) => std::process::exit(1),
        }
    }

    /// Merge flags over the configuration file.
    fn generation_config(&self, file: ConfigFile) -> GenerationConfig {
        let project_id = self
            .project_id
            .clone()
            .or(file.project.id)
            .unwrap_or_default();
        let strict = self.strict || file.output.strict.unwrap_or(false);

        let mut config = GenerationConfig::new(project_id)
            .add_timestamp(self.add_timestamp || file.output.add_timestamp.unwrap_or(false))
            .format(file.format)
            .dry_run(self.dry_run)
            .unknown_elements(if strict {
                UnknownElementPolicy::Fail
            } else {
                UnknownElementPolicy::Skip
            });

        config.secure_access_key = self
            .secure_access_key
            .clone()
            .or(file.project.secure_access_key);
        config.base_url = self.base_url.clone().or(file.project.base_url);
        config.element_resolver = self
            .element_resolver
            .or(file.element_case)
            .map(ElementResolver::from);
        config.file_resolver = self.file_resolver.or(file.file_case).map(FileResolver::from);
        if let Some(dir) = self.output.clone().or(file.output.dir) {
            config.output_dir = dir;
        }

        config
    }

    fn print_summary(summary: &GenerationSummary) {
        if summary.dry_run {
            println!("── Summary ──");
            println!("{} files would be generated", summary.models.len());
        }
    }
}

fn delivery_client(config: &GenerationConfig) -> DeliveryClient {
    let mut client = DeliveryClient::new(&config.project_id);
    if let Some(base_url) = &config.base_url {
        client = client.base_url(base_url);
    }
    if let Some(key) = &config.secure_access_key {
        client = client.secure_access_key(key);
    }
    client
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        cmd: GenerateCommand,
    }

    fn parse(args: &[&str]) -> GenerateCommand {
        let argv = std::iter::once("kontent-gen").chain(args.iter().copied());
        TestCli::try_parse_from(argv).unwrap().cmd
    }

    fn file(toml: &str) -> ConfigFile {
        ConfigFile::parse(toml, DEFAULT_CONFIG).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let config = parse(&["--project-id", "p1"]).generation_config(ConfigFile::default());

        assert_eq!(config.project_id, "p1");
        assert!(config.element_resolver.is_none());
        assert!(config.file_resolver.is_none());
        assert_eq!(config.unknown_elements, UnknownElementPolicy::Skip);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(!config.add_timestamp);
    }

    #[test]
    fn test_file_values_are_used() {
        let config = parse(&[]).generation_config(file(
            r#"
            [project]
            id = "from-file"
            base_url = "http://localhost:8080"

            [naming]
            elements = "camelCase"

            [output]
            dir = "models"
            strict = true
            "#,
        ));

        assert_eq!(config.project_id, "from-file");
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.element_resolver.unwrap().to_string(), "'camelCase'");
        assert_eq!(config.output_dir, PathBuf::from("models"));
        assert_eq!(config.unknown_elements, UnknownElementPolicy::Fail);
    }

    #[test]
    fn test_flags_override_file() {
        let config = parse(&[
            "--project-id",
            "from-flag",
            "--element-resolver",
            "snake_case",
            "--file-resolver",
            "PascalCase",
            "-o",
            "out",
            "--add-timestamp",
        ])
        .generation_config(file(
            r#"
            [project]
            id = "from-file"

            [naming]
            elements = "camelCase"
            files = "camelCase"

            [output]
            dir = "models"
            "#,
        ));

        assert_eq!(config.project_id, "from-flag");
        assert_eq!(config.element_resolver.unwrap().to_string(), "'snake_case'");
        assert_eq!(config.file_resolver.unwrap().to_string(), "'PascalCase'");
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!(config.add_timestamp);
    }

    #[test]
    fn test_unknown_resolver_flag_is_rejected() {
        let argv = ["kontent-gen", "--element-resolver", "kebab"];
        assert!(TestCli::try_parse_from(argv).is_err());
    }
}
