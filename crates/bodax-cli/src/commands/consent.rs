use anyhow::Result;

use bodax_core::{AppConfig, AppContext, ConsentState};

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn print_state(consent: ConsentState) {
    if !consent.given {
        println!("Cookie consent: not answered yet");
        return;
    }
    println!("Cookie consent: answered");
    println!("  Essential: yes");
    println!("  Analytics: {}", yes_no(consent.analytics));
    println!("  Marketing: {}", yes_no(consent.marketing));
}

pub fn show(config: AppConfig) -> Result<()> {
    let ctx = AppContext::open(config)?;
    print_state(ctx.consent());
    Ok(())
}

/// Accept everything, or keep essential cookies only
pub fn answer(config: AppConfig, accept_all: bool) -> Result<()> {
    let mut ctx = AppContext::open(config)?;
    ctx.update_consent(accept_all, accept_all)?;
    print_state(ctx.consent());
    Ok(())
}

pub fn reset(config: AppConfig) -> Result<()> {
    let mut ctx = AppContext::open(config)?;
    ctx.reset_consent()?;
    println!("Cookie consent cleared. The banner will show on next start.");
    Ok(())
}
