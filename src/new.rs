use std::fs;
use std::io::Write;
use std::path;

use anyhow::Context as _;

const FELDSPAR_YML: &str = "site: https://example.com/
base: /
integrations:
- mdx
- sitemap
";

pub fn create_new_project<P: AsRef<path::Path>>(dest: P) -> anyhow::Result<()> {
    create_new_project_for_path(dest.as_ref())
}

fn create_new_project_for_path(dest: &path::Path) -> anyhow::Result<()> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Could not create `{}`", dest.display()))?;

    create_file(&dest.join(feldspar_config::Config::FILE_NAME), FELDSPAR_YML)?;

    Ok(())
}

fn create_file(path: &path::Path, content: &str) -> anyhow::Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("Could not create `{}`", path.display()))?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
