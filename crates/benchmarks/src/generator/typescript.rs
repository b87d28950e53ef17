//! TypeScript templates.

use super::{DECLARATION_LINES, PREAMBLE_LINES};

pub(super) const PREAMBLE: [&str; PREAMBLE_LINES] = [
    "import React, { Component } from 'react';",
    "import type { User, ApiResponse } from './types';",
    "import * as utils from './utils';",
    "const fs = require('fs');",
    "",
];

/// Type declarations are skipped within this many lines of the target.
pub(super) const DECLARATION_MARGIN: i64 = 10;

/// Structural templates of the TypeScript rotation, keyed by index modulo 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsTemplate {
    /// Entity interface with fields and method signatures.
    Interface,
    /// Generic repository class with validated add, lookup and update.
    Repository,
    /// Async generic processing function that collects validation errors.
    Processor,
    /// Factory returning a filter predicate closure.
    ValidatorFactory,
}

impl TsTemplate {
    /// Every template kind, in rotation order.
    pub const ALL: [TsTemplate; 4] = [
        TsTemplate::Interface,
        TsTemplate::Repository,
        TsTemplate::Processor,
        TsTemplate::ValidatorFactory,
    ];

    /// Template used at rotation `index`.
    pub fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Render the template for rotation `index`. The block starts with a
    /// blank separator line.
    pub fn render(&self, index: usize) -> String {
        let entity = index / 4;
        match self {
            Self::Interface => interface_block(entity),
            Self::Repository => repository_block(index, entity),
            Self::Processor => processor_block(index, entity),
            Self::ValidatorFactory => validator_block(index),
        }
    }
}

fn interface_block(entity: usize) -> String {
    format!(
        r#"
interface Entity{entity} {{
    id: number;
    name: string;
    createdAt: Date;
    updatedAt?: Date;

    getName(): string;
    setName(name: string): void;
    validate(): boolean;
}}"#
    )
}

fn repository_block(index: usize, entity: usize) -> String {
    format!(
        r#"
class Repository{index}<T extends Entity{entity}> {{
    private items: T[] = [];

    constructor(private readonly label: string) {{}}

    async add(item: T): Promise<T> {{
        if (!item.name || item.name.trim() === '') {{
            throw new Error('Name is required');
        }}

        for (const existing of this.items) {{
            if (existing.id === item.id) {{
                throw new Error(`Item ${{item.id}} already exists`);
            }}
        }}

        this.items.push(item);
        return item;
    }}

    findById<K extends keyof T>(key: K, value: T[K]): T | undefined {{
        return this.items.find(item => item[key] === value);
    }}

    async update(id: number, updates: Partial<T>): Promise<T | null> {{
        const index = this.items.findIndex(item => item.id === id);
        if (index === -1) {{
            return null;
        }}

        const updated = {{ ...this.items[index], ...updates }};
        this.items[index] = updated;
        return updated;
    }}
}}"#
    )
}

fn processor_block(index: usize, entity: usize) -> String {
    format!(
        r#"
async function processEntity{index}<T extends Entity{entity}>(
    entity: T,
    options: ProcessOptions = {{}}
): Promise<ProcessResult<T>> {{
    try {{
        if (!entity.validate()) {{
            throw new Error('Invalid entity');
        }}

        const result: ProcessResult<T> = {{
            success: false,
            data: entity,
            errors: []
        }};

        if (options.strict) {{
            for (const key in entity) {{
                if (Object.prototype.hasOwnProperty.call(entity, key)) {{
                    const value = entity[key];
                    if (value === null || value === undefined) {{
                        result.errors.push(`Missing value for ${{key}}`);
                    }}
                }}
            }}
        }}

        result.success = result.errors.length === 0;
        return result;
    }} catch (error) {{
        return {{
            success: false,
            data: entity,
            errors: [error instanceof Error ? error.message : String(error)]
        }};
    }}
}}"#
    )
}

fn validator_block(index: usize) -> String {
    format!(
        r#"
const createValidator{index} = <T>(
    predicate: (item: T) => boolean
): ((items: T[]) => T[]) => {{
    return (items: T[]): T[] => {{
        return items.filter(predicate);
    }};
}};"#
    )
}

pub(super) fn declarations(index: usize) -> [String; DECLARATION_LINES] {
    [
        "type ProcessOptions = { strict?: boolean; timeout?: number; };".to_string(),
        "type ProcessResult<T> = { success: boolean; data: T; errors: string[]; };".to_string(),
        format!("enum Status{index} {{ PENDING = 'pending', COMPLETED = 'completed' }}"),
        String::new(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::count_lines;

    #[test]
    fn test_rotation_cycles_through_four_kinds() {
        let kinds: Vec<_> = (0..8).map(TsTemplate::for_index).collect();
        assert_eq!(&kinds[..4], &TsTemplate::ALL);
        assert_eq!(&kinds[4..], &TsTemplate::ALL);
    }

    #[test]
    fn test_block_size_does_not_depend_on_index() {
        for template in TsTemplate::ALL {
            assert_eq!(
                count_lines(&template.render(0)),
                count_lines(&template.render(9999))
            );
        }
    }

    #[test]
    fn test_repository_rejects_empty_name_and_duplicates() {
        let block = TsTemplate::Repository.render(5);
        assert!(block.contains("class Repository5<T extends Entity1>"));
        assert!(block.contains("throw new Error('Name is required');"));
        assert!(block.contains("throw new Error(`Item ${item.id} already exists`);"));
        assert!(block.contains("async update(id: number"));
    }

    #[test]
    fn test_processor_accumulates_errors() {
        let block = TsTemplate::Processor.render(2);
        assert!(block.contains("result.errors.push(`Missing value for ${key}`);"));
    }

    #[test]
    fn test_declarations_include_enum() {
        let lines = declarations(3);
        assert!(lines[0].starts_with("type ProcessOptions"));
        assert_eq!(
            lines[2],
            "enum Status3 { PENDING = 'pending', COMPLETED = 'completed' }"
        );
        assert!(lines[3].is_empty());
    }
}
