//! Literal blocks injected into the document.
//!
//! Both blocks carry their own trailing `</body>` / `</head>` tag because
//! injection works by replacing the original closing tag with the block.
//! The surrounding whitespace is part of the contract: the injected markup
//! keeps the indentation of the closing tags it replaces.

/// Mermaid loader plus initialization, replacing `</body>`.
pub const SCRIPT_BLOCK: &str = r#"
    <script src="https://cdn.jsdelivr.net/npm/mermaid/dist/mermaid.min.js"></script>
    <script>
        mermaid.initialize({ startOnLoad: true, theme: 'default' });
    </script>
    </body>
    "#;

/// Centering rule for `.mermaid` containers, replacing `</head>`.
pub const STYLE_BLOCK: &str = r#"
    <style>
        .mermaid {
            text-align: center;
            margin: 2em 0;
        }
    </style>
    </head>
    "#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_block_carries_closing_body_tag() {
        assert!(SCRIPT_BLOCK.contains("</body>"));
        assert!(SCRIPT_BLOCK.contains("mermaid.min.js"));
        assert!(SCRIPT_BLOCK.contains("startOnLoad: true"));
    }

    #[test]
    fn test_style_block_carries_closing_head_tag() {
        assert!(STYLE_BLOCK.contains("</head>"));
        assert!(STYLE_BLOCK.contains("text-align: center"));
        assert!(STYLE_BLOCK.contains("margin: 2em 0"));
    }
}
