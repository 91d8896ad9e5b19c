//! Skillmatch: keyword-based resume and job description matching tool

mod cli;
mod config;
mod engine;
mod error;
mod input;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, SkillsAction};
use config::{Config, OutputFormat};
use engine::text::TextStats;
use engine::SkillMatchEngine;
use error::{Result, SkillMatchError};
use input::InputManager;
use log::{error, info};
use output::{save_report_to_file, suggest_filename, ReportGenerator};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(
    command: Commands,
    config: Config,
    config_path: Option<PathBuf>,
) -> Result<()> {
    match command {
        Commands::Scan {
            resume,
            job,
            detailed,
            output,
            save,
        } => {
            info!("Starting skill match scan");

            // Validate input files
            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| SkillMatchError::InvalidInput(format!("Resume file: {}", e)))?;

            cli::validate_file_extension(&job, &["txt", "md"]).map_err(|e| {
                SkillMatchError::InvalidInput(format!("Job description file: {}", e))
            })?;

            // Parse output format, falling back to the configured default
            let output_format = match &output {
                Some(format) => {
                    cli::parse_output_format(format).map_err(|e| SkillMatchError::InvalidInput(e))?
                }
                None => config.output.format.clone(),
            };
            let detailed = detailed || config.output.detailed;

            // Progress chatter goes to stdout only for console output so
            // json and markdown stay pipeable.
            let console_output = matches!(output_format, OutputFormat::Console);

            if console_output {
                println!("🚀 Skill match scan");
                println!("📄 Resume: {}", resume.display());
                println!("💼 Job Description: {}", job.display());
                if detailed {
                    println!("📊 Detailed analysis enabled");
                }
                println!("\n📂 Extracting text from files...");
            }

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;

            if console_output {
                println!("📄 Resume text: {} characters", resume_text.len());
                println!("💼 Job description text: {} characters", job_text.len());

                if detailed {
                    let resume_stats = TextStats::from_text(&resume_text);
                    let job_stats = TextStats::from_text(&job_text);
                    println!("\n📊 Input Statistics:");
                    println!(
                        "  • Resume: {} words, {} sentences",
                        resume_stats.words, resume_stats.sentences
                    );
                    println!(
                        "  • Job description: {} words, {} sentences",
                        job_stats.words, job_stats.sentences
                    );
                }
            }

            // Run the matching engine
            let engine = SkillMatchEngine::new(&config)?;
            if console_output {
                println!(
                    "\n🔍 Matching against {} known skills...",
                    engine.dictionary().skill_count()
                );
            }
            let report = engine.analyze(&resume_text, &job_text);

            // Render the report
            let generator =
                ReportGenerator::with_options(config.output.color_output, detailed, true, true);
            let rendered = generator.generate_report(&report, &output_format)?;
            println!("{}", rendered);

            // Save to file if requested
            if let Some(save_path) = save {
                let file_content = if console_output {
                    // Saved console reports are always plain text
                    ReportGenerator::with_options(false, detailed, true, true)
                        .generate_report(&report, &output_format)?
                } else {
                    rendered
                };
                save_report_to_file(&file_content, &save_path)?;

                if console_output {
                    println!("💾 Report saved to: {}", save_path.display());
                } else {
                    info!("report saved to {}", save_path.display());
                }
            } else if !console_output {
                info!(
                    "add --save {} to write this report to a file",
                    suggest_filename(&output_format, &resume.to_string_lossy(), false)
                );
            }

            if console_output {
                println!("🎯 Scan complete! Match rate: {}%", report.match_rate);
            }
        }

        Commands::Skills { action } => match action {
            SkillsAction::List { technical, soft } => {
                let engine = SkillMatchEngine::new(&config)?;
                let dictionary = engine.dictionary();

                println!("📚 Known Skills\n");

                if !soft {
                    println!(
                        "🔧 Technical Skills ({}):",
                        dictionary.technical_skills().len()
                    );
                    for skill in dictionary.technical_skills() {
                        print_skill_line(skill, dictionary.synonyms_of(skill));
                    }
                    println!();
                }

                if !technical {
                    println!("🤝 Soft Skills ({}):", dictionary.soft_skills().len());
                    for skill in dictionary.soft_skills() {
                        print_skill_line(skill, dictionary.synonyms_of(skill));
                    }
                    println!();
                }

                println!(
                    "💡 Add your own skills in the [dictionary] section of the config file"
                );
            }

            SkillsAction::Lookup { term } => {
                let engine = SkillMatchEngine::new(&config)?;
                let dictionary = engine.dictionary();

                match dictionary.resolve(&term) {
                    Some(resolved) => {
                        match resolved.via_synonym {
                            Some(synonym) => println!(
                                "✅ '{}' is a synonym of '{}' ({} skill)",
                                synonym, resolved.canonical, resolved.category
                            ),
                            None => println!(
                                "✅ '{}' is a known {} skill",
                                resolved.canonical, resolved.category
                            ),
                        }

                        let synonyms = dictionary.synonyms_of(resolved.canonical);
                        if !synonyms.is_empty() {
                            println!("   Also matches: {}", synonyms.join(", "));
                        }
                    }
                    None => {
                        println!("❌ '{}' is not in the skill dictionary", term);
                        if let Some((suggestion, score)) = dictionary.closest(&term) {
                            println!(
                                "💡 Did you mean '{}'? ({:.0}% similar)",
                                suggestion,
                                score * 100.0
                            );
                        }
                    }
                }
            }
        },

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!(
                    "Config File: {}",
                    config_path.unwrap_or_else(Config::config_path).display()
                );
                println!("\nScoring:");
                println!(
                    "  Technical Weight: {:.1}%",
                    config.scoring.technical_weight * 100.0
                );
                println!("  Soft Weight: {:.1}%", config.scoring.soft_weight * 100.0);
                println!("  Critical Boost: {:.1}x", config.scoring.critical_boost);
                println!(
                    "  Frequency Saturation: {:.0} mentions",
                    config.scoring.frequency_saturation
                );
                println!(
                    "  Critical Skills: {}",
                    config.scoring.critical_skills.join(", ")
                );
                println!("\nDictionary Additions:");
                println!(
                    "  Technical: {}",
                    format_list(&config.dictionary.extra_technical_skills)
                );
                println!(
                    "  Soft: {}",
                    format_list(&config.dictionary.extra_soft_skills)
                );
                println!(
                    "  Synonym Entries: {}",
                    config.dictionary.extra_synonyms.len()
                );
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                match &config_path {
                    Some(path) => default_config.save_to(path)?,
                    None => default_config.save()?,
                }
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

fn print_skill_line(skill: &str, synonyms: &[String]) {
    if synonyms.is_empty() {
        println!("  • {}", skill);
    } else {
        println!("  • {} (also: {})", skill, synonyms.join(", "));
    }
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
