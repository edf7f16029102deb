//! Documentation scaffolds rendered for the notification layer.

use super::error::RemediationResult;
use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Kinds of documentation scaffold the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Endpoint documentation skeleton.
    Api,
    /// Component README skeleton.
    Readme,
    /// Generic guide placeholder.
    Guide,
}

impl DocumentKind {
    /// Returns the template name backing this kind.
    const fn template_name(self) -> &'static str {
        match self {
            Self::Api => "api_doc",
            Self::Readme => "readme_doc",
            Self::Guide => "guide_doc",
        }
    }
}

const API_TEMPLATE: &str = "\
## API Documentation

### Endpoint
Auto-generated from code analysis

### Request
```json
{
  \"example\": \"request\"
}
```

### Response
```json
{
  \"example\": \"response\"
}
```

### Error Codes
- 400: Bad Request
- 401: Unauthorized
- 404: Not Found
- 500: Internal Server Error

---
*Auto-generated documentation - Please review and enhance*
";

const README_TEMPLATE: &str = "\
# Component Documentation

## Overview
Auto-generated component documentation.

## Installation
See the project manifest for dependency setup.

## Usage
Document representative calls here.

## Configuration
See configuration section for details.

---
*Auto-generated - Please enhance with specific details*
";

const GUIDE_TEMPLATE: &str = "# Documentation\n\nAuto-generated documentation placeholder.\n";

#[expect(
    clippy::expect_used,
    reason = "static templates are compile-time constants validated by unit tests"
)]
static TEMPLATES: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    for (name, source) in [
        ("api_doc", API_TEMPLATE),
        ("readme_doc", README_TEMPLATE),
        ("guide_doc", GUIDE_TEMPLATE),
    ] {
        env.add_template(name, source)
            .expect("static documentation template must parse");
    }
    env
});

/// Renders the documentation scaffold for the given kind.
///
/// # Errors
///
/// Returns [`super::RemediationError::Template`] when the scaffold fails to
/// render.
pub fn render_documentation(kind: DocumentKind) -> RemediationResult<String> {
    let template = TEMPLATES.get_template(kind.template_name())?;
    Ok(template.render(context! {})?)
}
