use anyhow::{Context, Result};
use wordlimit::{Config, FormContext, FormTag, WordLimit};

pub fn execute(
    config: &Config,
    tag: &str,
    value: Option<String>,
    error: Option<String>,
    json: bool,
) -> Result<()> {
    let tag = FormTag::parse(tag).context("Invalid --tag")?;

    let mut ctx = FormContext::default();
    if let Some(value) = value {
        ctx = ctx.with_value(tag.name.as_str(), value);
    }
    if let Some(error) = error {
        ctx = ctx.with_error(tag.name.as_str(), error);
    }

    let plugin = WordLimit::new(config);
    if json {
        let field = plugin.renderer().field(&tag, &ctx);
        println!("{}", serde_json::to_string_pretty(&field)?);
    } else {
        println!("{}", plugin.render(&tag, &ctx));
    }

    Ok(())
}
