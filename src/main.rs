use clap::Parser;
use qr_studio::{cli, config, error, generator, logging, reader, scanner, session};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use qr_studio_common::{translate, TextKey};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let config = Config::load()?;
    let lang = config.language;

    match cli.command {
        Commands::Read { paths, recursive, json } => {
            let images = scanner::collect_images(&paths, recursive)?;
            if images.is_empty() {
                let target = paths
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(error::QrStudioError::NoImagesFound(target));
            }

            let results = reader::read_images(&images, !json && images.len() > 1);

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for result in &results {
                    println!("📷 {}", result.file_name);
                    if let Some(err) = &result.error {
                        println!("  ✖ {}: {}", translate(lang, TextKey::ImageLoadFailed), err);
                    } else if result.codes.is_empty() {
                        println!("  - {}", translate(lang, TextKey::NoQrFound));
                    } else {
                        for code in &result.codes {
                            println!(
                                "  ✔ {} (v{}, {})",
                                code.content, code.version, code.ec_level
                            );
                        }
                    }
                }
            }
        }

        Commands::Generate { text, output, format, style } => {
            let opts = generator::build_options(&style, &config)?;
            let path = generator::output_path(output, format);
            generator::write_code(&text, &opts, format, &path)?;
            println!("✔ {}", path.display());
        }

        Commands::Verify { text, style } => {
            let opts = generator::build_options(&style, &config)?;
            match generator::verify_roundtrip(&text, &opts) {
                Ok(content) => {
                    println!("✔ {}: {}", translate(lang, TextKey::VerifyMatch), content);
                }
                Err(e) => {
                    println!("✖ {}", translate(lang, TextKey::VerifyMismatch));
                    return Err(e);
                }
            }
        }

        Commands::Interactive => {
            session::run_interactive(&config)?;
        }

        Commands::Config { show, lang, theme, size, margin, ec } => {
            let mut config = config;
            let changed = lang.is_some() || theme.is_some() || size.is_some() || margin.is_some() || ec.is_some();

            if let Some(lang) = lang {
                config.language = lang;
            }
            if let Some(theme) = theme {
                config.theme = theme;
            }
            if let Some(size) = size {
                config.default_size = size;
            }
            if let Some(margin) = margin {
                config.default_margin = margin;
            }
            if let Some(ec) = ec {
                config.default_ec_level = ec;
            }

            if changed {
                config.generate_options().validate()?;
                config.save()?;
                println!("✔ {}", translate(config.language, TextKey::SettingsSaved));
            }

            if show || !changed {
                println!("{}", config.summary());
            }
        }
    }

    Ok(())
}
