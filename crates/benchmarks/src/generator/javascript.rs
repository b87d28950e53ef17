//! JavaScript templates.

use super::{DECLARATION_LINES, PREAMBLE_LINES};

pub(super) const PREAMBLE: [&str; PREAMBLE_LINES] = [
    "import React from 'react';",
    "import { useState, useEffect } from 'react';",
    "const fs = require('fs');",
    "const path = require('path');",
    "",
];

/// Declarations are skipped within this many lines of the target.
pub(super) const DECLARATION_MARGIN: i64 = 5;

/// Structural templates of the JavaScript rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsTemplate {
    /// Class with a constructor, a branching method and a getter.
    Class,
    /// Branching function with a loop and a switch, plus an async arrow
    /// function that fetches.
    Function,
}

impl JsTemplate {
    /// Every template kind.
    pub const ALL: [JsTemplate; 2] = [JsTemplate::Class, JsTemplate::Function];

    /// Template used at rotation `index`: a class every fifth block.
    pub fn for_index(index: usize) -> Self {
        if index % 5 == 0 {
            Self::Class
        } else {
            Self::Function
        }
    }

    /// Render the template for rotation `index`. The block starts with a
    /// blank separator line.
    pub fn render(&self, index: usize) -> String {
        match self {
            Self::Class => class_block(index),
            Self::Function => function_block(index),
        }
    }
}

fn class_block(index: usize) -> String {
    let class_id = index / 5;
    format!(
        r#"
class Widget{class_id} {{
    constructor() {{
        this.value = {index};
        this.name = 'widget{index}';
    }}

    update{index}(a, b, c) {{
        if (a > 0) {{
            for (let i = 0; i < b; i++) {{
                if (i % 2 === 0) {{
                    this.value += c;
                }} else if (i % 3 === 0) {{
                    this.value -= c;
                }} else {{
                    this.value *= 2;
                }}
            }}
        }} else if (a < 0) {{
            while (b > 0) {{
                this.value += a;
                b--;
            }}
        }}
        return this.value && a || b + c * 2;
    }}

    get current() {{
        return this.value;
    }}
}}"#
    )
}

fn function_block(index: usize) -> String {
    format!(
        r#"
function compute{index}(x, y, z) {{
    let result = 0;

    if (x > 0) {{
        result += x;
    }} else if (x < 0) {{
        result -= x;
    }} else {{
        result = 1;
    }}

    for (let i = 0; i < y; i++) {{
        if (i % 2 === 0) {{
            result *= 2;
        }} else {{
            result += z;
        }}
    }}

    switch (result % 4) {{
        case 0:
            result += 10;
            break;
        case 1:
            result += 20;
            break;
        case 2:
            result += 30;
            break;
        default:
            result += 40;
    }}

    return result;
}}

const fetchRecord{index} = async (id, options) => {{
    const response = await fetch(`/api/records/${{id}}`, options);
    return response.json();
}};"#
    )
}

pub(super) fn declarations(index: usize) -> [String; DECLARATION_LINES] {
    [
        format!("const label{index} = 'value {index}';"),
        format!("let counter{index} = {index};"),
        format!("var legacy{index} = {};", index * 2),
        String::new(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::count_lines;

    #[test]
    fn test_rotation_emits_class_every_fifth_block() {
        let kinds: Vec<_> = (0..10).map(JsTemplate::for_index).collect();
        assert_eq!(kinds[0], JsTemplate::Class);
        assert_eq!(kinds[5], JsTemplate::Class);
        assert!(kinds[1..5].iter().all(|k| *k == JsTemplate::Function));
    }

    #[test]
    fn test_block_size_does_not_depend_on_index() {
        for template in JsTemplate::ALL {
            assert_eq!(
                count_lines(&template.render(0)),
                count_lines(&template.render(12345))
            );
        }
    }

    #[test]
    fn test_blocks_start_with_separator() {
        for template in JsTemplate::ALL {
            assert!(template.render(3).starts_with('\n'));
        }
    }

    #[test]
    fn test_function_block_interpolates_fetch_path() {
        let block = JsTemplate::Function.render(7);
        assert!(block.contains("`/api/records/${id}`"));
        assert!(block.contains("const fetchRecord7 = async"));
    }

    #[test]
    fn test_declarations_cover_each_binding_kind() {
        let lines = declarations(4);
        assert!(lines[0].starts_with("const "));
        assert!(lines[1].starts_with("let "));
        assert_eq!(lines[2], "var legacy4 = 8;");
        assert!(lines[3].is_empty());
    }
}
