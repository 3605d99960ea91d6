//! Theme preference commands.

use anyhow::Result;
use serde_json::json;
use shophub_cache::Theme;

use super::{ThemeArgs, ThemeCommand};
use crate::context::Context;

/// Run the theme command.
pub async fn run(args: ThemeArgs, ctx: &Context) -> Result<()> {
    let preference = ctx.theme()?;

    let theme = match args.command.unwrap_or(ThemeCommand::Show) {
        ThemeCommand::Show => preference.get()?,
        ThemeCommand::Set { theme } => {
            let theme: Theme = theme.parse()?;
            preference.set(theme)?;
            theme
        }
        ThemeCommand::Toggle => preference.toggle()?,
    };

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "theme": theme }));
    } else {
        ctx.output.success(&format!("Theme: {}", theme));
    }

    Ok(())
}
