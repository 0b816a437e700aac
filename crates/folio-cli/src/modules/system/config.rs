use std::path::{Path, PathBuf};

fn folio_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("HOME is not set"))?;
    Ok(Path::new(&home).join(".folio"))
}

pub(crate) fn credentials_path() -> anyhow::Result<PathBuf> {
    Ok(folio_dir()?.join("credentials.json"))
}

pub(crate) fn session_path() -> anyhow::Result<PathBuf> {
    Ok(folio_dir()?.join("session.json"))
}
