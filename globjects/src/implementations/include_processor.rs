/// CPU-side `#include` expansion for contexts without ARB_shading_language_include
///
/// Names are resolved against the context's named strings: absolute names
/// (`/lib/light.glsl`) directly, relative names through each include path in
/// order. Every named string is expanded at most once per source, which also
/// breaks include cycles. The `#extension GL_ARB_shading_language_include`
/// directive is dropped since the driver would reject it.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{Error, Result};

const INCLUDE_DIRECTIVE: &str = "#include";
const INCLUDE_EXTENSION: &str = "GL_ARB_shading_language_include";

pub struct IncludeProcessor<'a> {
    named_strings: &'a FxHashMap<String, String>,
    include_paths: &'a [String],
    included: FxHashSet<String>,
}

impl<'a> IncludeProcessor<'a> {
    pub fn new(named_strings: &'a FxHashMap<String, String>, include_paths: &'a [String]) -> Self {
        Self {
            named_strings,
            include_paths,
            included: FxHashSet::default(),
        }
    }

    /// Expand every include directive in `source`
    pub fn resolve(mut self, source: &str) -> Result<String> {
        let mut output = String::with_capacity(source.len());
        self.expand(source, &mut output)?;
        Ok(output)
    }

    fn expand(&mut self, source: &str, output: &mut String) -> Result<()> {
        for line in source.lines() {
            let trimmed = line.trim_start();

            if trimmed.starts_with("#extension") && trimmed.contains(INCLUDE_EXTENSION) {
                continue;
            }

            if let Some(rest) = trimmed.strip_prefix(INCLUDE_DIRECTIVE) {
                let path = parse_include_path(rest).ok_or_else(|| {
                    crate::glo_err!("glo::IncludeProcessor", "Malformed include directive: {}", line.trim())
                })?;
                let (name, contents) = self.lookup(path)?;
                if self.included.insert(name) {
                    self.expand(contents, output)?;
                }
                continue;
            }

            output.push_str(line);
            output.push('\n');
        }
        Ok(())
    }

    fn lookup(&self, path: &str) -> Result<(String, &'a str)> {
        let named_strings = self.named_strings;
        let candidates: Vec<String> = if path.starts_with('/') {
            vec![path.to_string()]
        } else {
            self.include_paths
                .iter()
                .map(|dir| format!("{}/{}", dir.trim_end_matches('/'), path))
                .collect()
        };

        for candidate in candidates {
            if let Some(contents) = named_strings.get(&candidate) {
                return Ok((candidate, contents.as_str()));
            }
        }

        crate::glo_error!("glo::IncludeProcessor", "Include not found: {}", path);
        Err(Error::IncludeNotFound(path.to_string()))
    }
}

/// Extract the name from `"name"` or `<name>`
fn parse_include_path(rest: &str) -> Option<&str> {
    let rest = rest.trim();
    let (open, close) = match rest.chars().next()? {
        '"' => ('"', '"'),
        '<' => ('<', '>'),
        _ => return None,
    };
    let inner = rest.strip_prefix(open)?;
    let end = inner.find(close)?;
    let path = &inner[..end];
    if path.is_empty() {
        None
    } else {
        Some(path)
    }
}

#[cfg(test)]
#[path = "include_processor_tests.rs"]
mod tests;
