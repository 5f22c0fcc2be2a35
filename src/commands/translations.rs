use anyhow::Result;
use checktime_core::i18n::CATALOG;
use checktime_core::ApiClient;

/// Fetch and print translations, either one group or the whole table for
/// the configured language.
pub async fn run(client: &ApiClient, language: &str, group: Option<String>) -> Result<()> {
    match group {
        Some(group) => {
            CATALOG
                .load_group(client.http(), client.base_url(), &group)
                .await?
        }
        None => {
            CATALOG
                .load_language(client.http(), client.base_url(), language)
                .await?
        }
    };

    let mut entries: Vec<(String, String)> = CATALOG.entries().into_iter().collect();
    entries.sort();

    for (key, value) in entries {
        println!("{} = {}", key, value);
    }

    Ok(())
}
