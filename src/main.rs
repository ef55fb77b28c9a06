use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use design_patterns::{behavioral, creational, structural};

#[derive(Parser, Debug)]
#[command(name = "patterns", version, about = "Runnable design pattern demos")]
struct Cli {
    /// Patterns to run; all of them when empty.
    #[arg(value_enum)]
    patterns: Vec<PatternName>,

    /// Only run patterns from this group.
    #[arg(long, value_enum)]
    group: Option<Group>,

    /// Print the available patterns and exit.
    #[arg(long)]
    list: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Group {
    Creational,
    Structural,
    Behavioral,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PatternName {
    AbstractFactory,
    Builder,
    FactoryMethod,
    Prototype,
    Singleton,
    Adapter,
    Bridge,
    Composite,
    Facade,
    Flyweight,
    Proxy,
    ChainOfResponsibility,
    Command,
    Iterator,
    Mediator,
    Memento,
    Observer,
    State,
    Strategy,
    TemplateMethod,
    Visitor,
}

impl PatternName {
    fn group(self) -> Group {
        use PatternName::*;
        match self {
            AbstractFactory | Builder | FactoryMethod | Prototype | Singleton => Group::Creational,
            Adapter | Bridge | Composite | Facade | Flyweight | Proxy => Group::Structural,
            _ => Group::Behavioral,
        }
    }

    fn title(self) -> String {
        self.to_possible_value()
            .map(|value| value.get_name().replace('-', " "))
            .unwrap_or_default()
    }

    fn run(self) -> design_patterns::Result<()> {
        use PatternName::*;
        match self {
            AbstractFactory => creational::abstract_factory::run(),
            Builder => creational::builder::run(),
            FactoryMethod => creational::factory_method::run(),
            Prototype => creational::prototype::run(),
            Singleton => creational::singleton::run(),
            Adapter => structural::adapter::run(),
            Bridge => structural::bridge::run(),
            Composite => structural::composite::run(),
            Facade => structural::facade::run(),
            Flyweight => structural::flyweight::run(),
            Proxy => structural::proxy::run(),
            ChainOfResponsibility => behavioral::chain_of_responsibility::run(),
            Command => behavioral::command::run(),
            Iterator => behavioral::iterator::run(),
            Mediator => behavioral::mediator::run(),
            Memento => behavioral::memento::run(),
            Observer => behavioral::observer::run(),
            State => behavioral::state::run(),
            Strategy => behavioral::strategy::run(),
            TemplateMethod => behavioral::template_method::run(),
            Visitor => behavioral::visitor::run(),
        }
    }
}

fn selected(cli: &Cli) -> Vec<PatternName> {
    let requested: Vec<PatternName> = if cli.patterns.is_empty() {
        PatternName::value_variants().to_vec()
    } else {
        cli.patterns.clone()
    };
    requested
        .into_iter()
        .filter(|pattern| cli.group.map_or(true, |group| pattern.group() == group))
        .collect()
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with demo output on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list {
        for pattern in selected(&cli) {
            println!("{:<24} {:?}", pattern.title(), pattern.group());
        }
        return Ok(());
    }

    for pattern in selected(&cli) {
        let title = pattern.title().to_uppercase();
        println!("\n{}\n{}", title.bold().cyan(), "=".repeat(title.len()));
        pattern
            .run()
            .with_context(|| format!("{} demo failed", pattern.title()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_belongs_to_a_group() {
        let groups: Vec<Group> = PatternName::value_variants()
            .iter()
            .map(|p| p.group())
            .collect();
        assert_eq!(groups.iter().filter(|g| **g == Group::Creational).count(), 5);
        assert_eq!(groups.iter().filter(|g| **g == Group::Structural).count(), 6);
        assert_eq!(groups.iter().filter(|g| **g == Group::Behavioral).count(), 10);
    }

    #[test]
    fn test_group_filter() {
        let cli = Cli::parse_from(["patterns", "memento", "adapter", "--group", "behavioral"]);
        assert_eq!(selected(&cli), vec![PatternName::Memento]);
    }

    #[test]
    fn test_kebab_case_names() {
        let cli = Cli::parse_from(["patterns", "chain-of-responsibility"]);
        assert_eq!(cli.patterns, vec![PatternName::ChainOfResponsibility]);
        assert_eq!(PatternName::TemplateMethod.title(), "template method");
    }
}
