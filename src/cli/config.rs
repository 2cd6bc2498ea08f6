use folio::config::Config;
use folio_contact::is_present;

/// Print which delivery settings are present, without their values.
pub fn check(config: &Config) -> anyhow::Result<()> {
    let delivery = &config.delivery;

    for (name, value) in delivery.required_settings() {
        let status = if is_present(value) { "present" } else { "missing" };
        println!("{name:<14} {status}");
    }

    let missing = delivery.missing();
    if !missing.is_empty() {
        anyhow::bail!("missing delivery settings: {}", missing.join(", "));
    }

    println!("delivery configuration complete");

    Ok(())
}
