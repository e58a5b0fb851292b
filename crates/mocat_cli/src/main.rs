use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

use mocat_core::{
    cache, utils::mtime, BinaryReader, CatalogBuilder, Gettext, MoHeader, Translator, TranslatorConfig,
};

#[derive(Parser)]
#[command(name = "mocat", about = "MO catalog lookup and inspection")]
struct Cli {
    #[command(flatten)]
    target: Target,
    #[command(subcommand)]
    cmd: Cmd,
}

/// Which catalog to use. Flags override values from `--config`.
#[derive(Args, Clone)]
struct Target {
    /// JSON file with base_dir / domain / locale / cache
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Base directory holding <locale>/LC_MESSAGES/<domain>.mo
    #[arg(long, global = true)]
    dir: Option<PathBuf>,
    #[arg(long, global = true)]
    locale: Option<String>,
    #[arg(long, global = true)]
    domain: Option<String>,
    /// Never read or write the cache artifact
    #[arg(long, global = true, default_value_t = false)]
    no_cache: bool,
}

#[derive(Subcommand)]
enum Cmd {
    /// Singular lookup
    Gettext { msg: String },

    /// Plural lookup
    Ngettext {
        msg: String,
        plural: String,
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },

    /// Header, sizes and cache state
    Info,

    /// Every source form with its translations
    Dump {
        /// Print raw bytes as hex
        #[arg(long, default_value_t = false)]
        hex: bool,
    },

    /// Rebuild the cache artifact from the catalog file
    Cache,
}

impl Target {
    fn resolve(&self) -> Result<TranslatorConfig> {
        let mut cfg = match &self.config {
            Some(p) => TranslatorConfig::load(p).with_context(|| format!("config {}", p.display()))?,
            None => TranslatorConfig::default(),
        };
        if let Some(d) = &self.dir {
            cfg.base_dir = d.clone();
        }
        if let Some(l) = &self.locale {
            cfg.locale = l.clone();
        }
        if let Some(d) = &self.domain {
            cfg.domain = d.clone();
        }
        if self.no_cache {
            cfg.cache.enabled = false;
        }
        Ok(cfg)
    }
}

fn stamp(t: Option<SystemTime>) -> Result<String> {
    match t {
        Some(t) => Ok(OffsetDateTime::from(t).format(&Rfc3339)?),
        None => Ok("-".to_string()),
    }
}

fn render(bytes: &[u8], as_hex: bool) -> String {
    if as_hex {
        hex::encode(bytes)
    } else {
        serde_json::to_string(&String::from_utf8_lossy(bytes)).unwrap_or_default()
    }
}

fn info(t: &Translator) -> Result<()> {
    let mo = t.mo_path(t.domain());
    let cache_path = t.cache_path(t.domain());
    println!("base    : {}", t.base_dir().display());
    println!("locale  : {}", t.locale());
    println!("domain  : {}", t.domain());
    println!("catalog : {}", mo.display());
    match fs::metadata(&mo) {
        Ok(meta) => {
            let size = meta.len();
            println!("size    : {size}");
            print_header(&mo, size)?;
        }
        Err(_) => println!("size    : (missing)"),
    }
    println!("mtime   : {}", stamp(mtime(&mo))?);
    println!("cache   : {}", cache_path.display());
    println!("cached  : {}", stamp(mtime(&cache_path))?);
    println!(
        "fresh   : {}",
        t.config().cache.enabled && cache::is_fresh(&mo, &cache_path)
    );
    Ok(())
}

fn print_header(mo: &Path, size: u64) -> Result<()> {
    if size < mocat_core::consts::HDR_SIZE as u64 {
        println!("header  : (file shorter than header)");
        return Ok(());
    }
    let mut r = BinaryReader::open(mo)?;
    match MoHeader::parse(&mut r)? {
        Some(h) => {
            println!("magic   : {:#010x}", h.magic as u32);
            println!("strings : {}", h.num_strings);
            println!("orig    : @{}", h.orig_table_offset);
            println!("trans   : @{}", h.trans_table_offset);
            println!("hash    : {} @{}", h.hash_table_size, h.hash_table_offset);
            println!("required: {} ({})", h.min_file_size(), if h.fits(size) { "ok" } else { "truncated" });
        }
        None => println!("header  : (bad magic or revision)"),
    }
    Ok(())
}

fn dump(t: &Translator, as_hex: bool) {
    let catalog = t.catalog(t.domain());
    let mut entries: Vec<_> = catalog.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    for (key, forms) in entries {
        let forms: Vec<String> = forms.iter().map(|f| render(f, as_hex)).collect();
        println!("{} => [{}]", render(key, as_hex), forms.join(", "));
    }
    println!("entries: {}", catalog.len());
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = cli.target.resolve()?;
    tracing::debug!(dir = %cfg.base_dir.display(), locale = %cfg.locale, domain = %cfg.domain, "target");
    let t = Translator::with_config(cfg);

    match cli.cmd {
        Cmd::Gettext { msg } => println!("{}", t.gettext(&msg)),
        Cmd::Ngettext { msg, plural, count } => println!("{}", t.ngettext(&msg, &plural, count)),
        Cmd::Info => info(&t)?,
        Cmd::Dump { hex } => dump(&t, hex),
        Cmd::Cache => {
            let mo = t.mo_path(t.domain());
            let cache_path = t.cache_path(t.domain());
            let builder = CatalogBuilder::new(t.config().cache.clone());
            let catalog = builder
                .refresh_cache(&mo, &cache_path)
                .with_context(|| format!("rebuilding {}", cache_path.display()))?;
            if t.config().cache.enabled {
                println!("cache: wrote {}, entries={}", cache_path.display(), catalog.len());
            } else {
                println!("cache: disabled, parsed entries={}", catalog.len());
            }
        }
    }
    Ok(())
}
