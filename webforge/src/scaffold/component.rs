//! React component generation.
//!
//! Renders the JSX, SCSS-module and test files for one component. File
//! writing and overwrite confirmation stay in the CLI layer; this
//! module only produces paths and contents.

use std::path::PathBuf;

/// Component names that map to a semantic HTML element.
const SEMANTIC_TAGS: &[(&str, &str)] = &[
    ("Header", "header"),
    ("Section", "section"),
    ("Article", "article"),
    ("Nav", "nav"),
    ("Main", "main"),
    ("Footer", "footer"),
    ("Aside", "aside"),
];

/// Whether `name` is a valid PascalCase component name.
pub fn is_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => chars.all(|c| c.is_ascii_alphabetic()),
        _ => false,
    }
}

/// A rendered component file: path relative to the project root plus
/// its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentFile {
    pub relative_path: PathBuf,
    pub contents: String,
}

/// Template for one generated component.
#[derive(Debug, Clone)]
pub struct ComponentTemplate {
    name: String,
    use_motion: bool,
}

impl ComponentTemplate {
    pub fn new(name: impl Into<String>, use_motion: bool) -> Self {
        Self {
            name: name.into(),
            use_motion,
        }
    }

    /// Directory the component files live in.
    pub fn component_dir(&self) -> PathBuf {
        PathBuf::from("src").join("components").join(&self.name)
    }

    /// The semantic element for this component, `div` when the name
    /// doesn't match a known landmark.
    fn semantic_tag(&self) -> &'static str {
        let mut chars = self.name.chars();
        let normalized = match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_lowercase(),
            None => String::new(),
        };
        SEMANTIC_TAGS
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, tag)| *tag)
            .unwrap_or("div")
    }

    fn jsx(&self) -> String {
        let name = &self.name;
        let motion_import = if self.use_motion {
            "import { motion } from \"framer-motion\";\n"
        } else {
            ""
        };
        let element = if self.use_motion {
            "<motion.div className={styles.container}></motion.div>".to_string()
        } else {
            let tag = self.semantic_tag();
            format!("<{tag} className={{styles.container}}></{tag}>")
        };

        format!(
            "{motion_import}import React from 'react';\nimport styles from './{name}.module.scss';\n\nfunction {name}() {{\n  return (\n    {element}\n  );\n}}\n\nexport default {name};\n"
        )
    }

    fn scss(&self) -> String {
        format!("/* Module styles for the {} component */\n.container {{}}\n", self.name)
    }

    fn test(&self) -> String {
        let name = &self.name;
        format!(
            "import React from 'react';\nimport {{ render }} from '@testing-library/react';\nimport {name} from './{name}';\n\ndescribe('{name}', () => {{\n  it('renders without crashing', () => {{\n    render(<{name} />);\n  }});\n}});\n"
        )
    }

    /// All files for this component, renders included.
    pub fn files(&self) -> Vec<ComponentFile> {
        let dir = self.component_dir();
        vec![
            ComponentFile {
                relative_path: dir.join(format!("{}.jsx", self.name)),
                contents: self.jsx(),
            },
            ComponentFile {
                relative_path: dir.join(format!("{}.module.scss", self.name)),
                contents: self.scss(),
            },
            ComponentFile {
                relative_path: dir.join(format!("{}.test.js", self.name)),
                contents: self.test(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_validation() {
        assert!(is_pascal_case("Header"));
        assert!(is_pascal_case("UserCard"));
        assert!(!is_pascal_case("header"));
        assert!(!is_pascal_case("User_Card"));
        assert!(!is_pascal_case("User1"));
        assert!(!is_pascal_case(""));
    }

    #[test]
    fn semantic_tag_is_used_for_landmark_names() {
        let template = ComponentTemplate::new("Header", false);
        let jsx = &template.files()[0].contents;
        assert!(jsx.contains("<header className={styles.container}></header>"));
        assert!(!jsx.contains("framer-motion"));
    }

    #[test]
    fn unknown_names_fall_back_to_div() {
        let template = ComponentTemplate::new("UserCard", false);
        let jsx = &template.files()[0].contents;
        assert!(jsx.contains("<div className={styles.container}></div>"));
    }

    #[test]
    fn motion_overrides_the_semantic_tag() {
        let template = ComponentTemplate::new("Header", true);
        let jsx = &template.files()[0].contents;
        assert!(jsx.contains("import { motion } from \"framer-motion\";"));
        assert!(jsx.contains("<motion.div className={styles.container}></motion.div>"));
    }

    #[test]
    fn files_land_under_the_component_directory() {
        let template = ComponentTemplate::new("Badge", false);
        let files = template.files();
        assert_eq!(files.len(), 3);
        for file in &files {
            assert!(file
                .relative_path
                .starts_with(PathBuf::from("src/components/Badge")));
        }
        assert!(files[2].contents.contains("renders without crashing"));
    }
}
