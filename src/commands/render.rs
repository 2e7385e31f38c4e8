//! Render one location to stdout

use anyhow::Result;

use crate::helpers::html_escape;
use crate::shell::{Runtime, Shell};
use crate::Site;

/// Navigate to `path`, let transitions and loads finish, print the page
///
/// Must run inside a `LocalSet`.
pub async fn run(site: &Site, path: &str, as_text: bool) -> Result<()> {
    let mut runtime = Runtime::new(site.shell(path)?, site.config.frame_interval());
    runtime.settle().await;

    let shell = runtime.shell();
    if shell.location() != path {
        tracing::info!("{} ended up at {}", path, shell.location());
    }

    if as_text {
        println!("{}", shell.render().to_text());
    } else {
        println!("{}", document(shell));
    }

    Ok(())
}

/// Full HTML document for the shell's current state
pub fn document(shell: &Shell) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body data-path=\"{}\">\n{}\n</body>\n</html>",
        html_escape(&shell.title()),
        html_escape(shell.location()),
        shell.render().to_html()
    )
}
