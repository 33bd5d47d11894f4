//! Built-in documentation scaffold.

use crate::definition::ScaffoldDefinition;
use crate::result::Result;

/// Root directory name, and archive stem, used when none is configured
pub const DEFAULT_ROOT: &str = "software-architecture-scaffold";

/// Relative paths and contents of the built-in scaffold, in archive order
pub const DEFAULT_ENTRIES: [(&str, &str); 8] = [
    ("README.md", README),
    ("docs/architecture.md", ARCHITECTURE),
    ("docs/glossary.md", GLOSSARY),
    ("docs/decisions/0001-record-architecture-decisions.md", ADR_0001),
    ("docs/diagrams/context-diagram.mmd", CONTEXT_DIAGRAM),
    ("docs/diagrams/deployment-diagram.mmd", DEPLOYMENT_DIAGRAM),
    (".gitignore", GITIGNORE),
    ("LICENSE", LICENSE),
];

pub fn default_definition() -> Result<ScaffoldDefinition> {
    ScaffoldDefinition::from_pairs(DEFAULT_ENTRIES)
}

const README: &str = r#"# Software Architecture Scaffold

This repository provides a **starter template** for documenting software architecture.  
It merges elements from:
- https://github.com/shekhargulati/software-architecture-document-template
- https://github.com/bflorat/architecture-document-template

## Quickstart
1. Clone or fork this repo.
2. Edit `docs/architecture.md` to describe your system.
3. Record major technical choices as ADRs in `docs/decisions/`.
4. Add or update diagrams in `docs/diagrams/`.

Stay consistent. Keep docs living with the codebase.
"#;

const ARCHITECTURE: &str = r#"# Software Architecture Document

## 1. Introduction
- Purpose
- Scope
- References
- Definitions & Acronyms

## 2. Stakeholders & Concerns
- Stakeholders list
- Goals & constraints
- Quality attributes (availability, scalability, performance, etc.)

## 3. Context & Motivation
- Business context
- System context diagram (see `diagrams/context-diagram.mmd`)
- Key use cases

## 4. Architecture Overview
- Design principles
- Architectural style (layered, microservices, event-driven, etc.)
- Crosscutting concepts (logging, monitoring, security)

## 5. Views
### 5.1 Functional View
- Modules, components, services

### 5.2 Information View
- Data models, schemas

### 5.3 Concurrency View
- Threads, processes, async flows

### 5.4 Development View
- Code structure, build, CI/CD

### 5.5 Deployment View
- Topology, environments, containers (see `diagrams/deployment-diagram.mmd`)

### 5.6 Operational View
- Monitoring, alerting, DevOps

## 6. Quality Requirements
- Non-functional requirements
- Trade-offs

## 7. Architecture Decisions
- Document ADRs (see `docs/decisions`)

## 8. Risks & Technical Debt
- Known issues
- Mitigation strategies

## 9. Glossary
- Domain terms (see `glossary.md`)
"#;

const GLOSSARY: &str = r#"# Glossary

| Term | Definition |
|------|-------------|
| ADR  | Architecture Decision Record |
| NFR  | Non-functional Requirement |
"#;

const ADR_0001: &str = r#"# 1. Record Architecture Decisions

Date: 2025-09-22

## Status
Accepted

## Context
We need to track important technical decisions and their context.

## Decision
We will record architecture decisions as [ADRs](https://adr.github.io/madr/).

## Consequences
- Improves transparency
- Future developers understand reasoning
"#;

const CONTEXT_DIAGRAM: &str = r#"```mermaid
flowchart LR
    user((User)) --> app[System Under Design]
    app --> db[(Database)]
```"#;

const DEPLOYMENT_DIAGRAM: &str = r#"```mermaid
graph TD
    client[Client Browser] --> web[Web Server]
    web --> app[Application Service]
    app --> db[(Database)]
```"#;

const GITIGNORE: &str = r#"# Ignore build artifacts
*.log
*.tmp
*.swp
*.bak
"#;

const LICENSE: &str = r#"MIT License"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_definition_is_valid() {
        let definition = default_definition().unwrap();
        assert_eq!(definition.len(), 8);
        assert_eq!(definition.entries()[0].path, "README.md");
        assert_eq!(definition.entries()[7].path, "LICENSE");
    }

    #[test]
    fn test_readme_heading() {
        assert!(README.starts_with("# Software Architecture Scaffold"));
    }

    #[test]
    fn test_glossary_table() {
        assert!(GLOSSARY.contains("| ADR  | Architecture Decision Record |"));
        assert!(GLOSSARY.contains("| NFR  | Non-functional Requirement |"));
    }

    #[test]
    fn test_diagrams_are_mermaid_blocks() {
        for diagram in [CONTEXT_DIAGRAM, DEPLOYMENT_DIAGRAM] {
            assert!(diagram.starts_with("```mermaid\n"));
            assert!(diagram.ends_with("```"));
        }
    }
}
