//! # Interactive Shell
//!
//! Line-oriented terminal front end for the storefront session.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  > list                                                                 │
//! │    1. 🖱️ Wireless Mouse        $29.99   (stock 15)                     │
//! │    2. ⌨️ Mechanical Keyboard   $89.99   (stock 8)                      │
//! │    ...                                                                  │
//! │  > add 1                                                                │
//! │  > add 1                                                                │
//! │  > cart                                                                 │
//! │    🖱️ Wireless Mouse   x2   $29.99 each   $59.98                       │
//! │    ──────────────────────────────────────────────                      │
//! │    2 items                          TOTAL $59.98                       │
//! │  > checkout                                                             │
//! │    Checkout is a demo stub - no payment was processed.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are addressed by their 1-based catalog position, the way the
//! original grid numbered them - users never type product ids. A parse or
//! lookup failure prints a message and the session continues; no cart
//! intent ever terminates the process.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::commands;
use crate::state::{CartState, CatalogState};
use techstore_core::{CartView, Product};

/// A parsed shell intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Show the product grid.
    List,
    /// Show the cart projection.
    Cart,
    /// Add one unit of the product at the given 1-based position.
    Add(usize),
    /// Remove the product at the given position from the cart.
    Remove(usize),
    /// Set the quantity of the product at the given position.
    Quantity(usize, i64),
    /// Empty the cart.
    Clear,
    /// The stubbed checkout action.
    Checkout,
    /// Show usage.
    Help,
    /// End the session.
    Quit,
}

/// Parses one input line into a shell intent.
///
/// Accepts the aliases a terminal user reaches for (`ls`, `rm`, `exit`).
/// Returns a user-facing message on malformed input.
pub fn parse(line: &str) -> Result<ShellCommand, String> {
    let mut tokens = line.split_whitespace();
    let Some(verb) = tokens.next() else {
        return Err("type 'help' for commands".to_string());
    };

    let command = match verb {
        "list" | "ls" => ShellCommand::List,
        "cart" => ShellCommand::Cart,
        "add" => ShellCommand::Add(parse_position(tokens.next(), "add")?),
        "remove" | "rm" => ShellCommand::Remove(parse_position(tokens.next(), "remove")?),
        "qty" => {
            let position = parse_position(tokens.next(), "qty")?;
            let count: i64 = tokens
                .next()
                .ok_or("usage: qty <product#> <count>")?
                .parse()
                .map_err(|_| "qty takes a whole number count".to_string())?;
            ShellCommand::Quantity(position, count)
        }
        "clear" => ShellCommand::Clear,
        "checkout" => ShellCommand::Checkout,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("unknown command '{}' - try 'help'", other)),
    };

    if tokens.next().is_some() {
        return Err("too many arguments - try 'help'".to_string());
    }

    Ok(command)
}

fn parse_position(token: Option<&str>, verb: &str) -> Result<usize, String> {
    token
        .ok_or(format!("usage: {} <product#>", verb))?
        .parse()
        .map_err(|_| format!("{} takes a product number from 'list'", verb))
}

/// Renders the product grid.
pub fn render_products(products: &[Product]) -> String {
    let mut out = String::new();
    for (position, product) in products.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {} {:<22} {:>8}   (stock {})\n",
            position + 1,
            product.glyph,
            product.name,
            format!("{}", product.price()),
            product.stock,
        ));
    }
    out
}

/// Renders the cart projection.
pub fn render_cart(view: &CartView) -> String {
    if view.is_empty {
        return "Your cart is empty\n".to_string();
    }

    let mut out = String::new();
    for line in &view.lines {
        out.push_str(&format!(
            "{} {:<22} x{:<3} {:>8} each {:>9}\n",
            line.glyph,
            line.name,
            line.quantity,
            format!("{}", line.unit_price()),
            format!("{}", line.line_total()),
        ));
    }
    out.push_str("──────────────────────────────────────────────────────\n");
    out.push_str(&format!(
        "{} items{:>40}\n",
        view.totals.total_quantity,
        format!("TOTAL {}", view.total()),
    ));
    out
}

const HELP: &str = "\
Commands:
  list              show the product grid
  add <n>           add one unit of product n to the cart
  remove <n>        remove product n from the cart
  qty <n> <count>   set product n's quantity (0 removes it)
  cart              show the cart
  clear             empty the cart
  checkout          place the order (demo stub)
  quit              end the session
";

/// Runs the interactive session until EOF or `quit`.
pub fn run(catalog: &CatalogState, cart: &CartState) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Tech Store - type 'help' for commands\n");
    println!("{}", render_products(&commands::list_products(catalog)));
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(&mut stdout)?;
            continue;
        }
        match parse(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => {
                let output = dispatch(catalog, cart, command);
                if !output.is_empty() {
                    println!("{}", output.trim_end());
                }
            }
            Err(message) => println!("{}", message),
        }
        prompt(&mut stdout)?;
    }

    info!("Session ended");
    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> io::Result<()> {
    write!(stdout, "> ")?;
    stdout.flush()
}

/// Applies one parsed intent and returns the text to print.
fn dispatch(catalog: &CatalogState, cart: &CartState, command: ShellCommand) -> String {
    match command {
        ShellCommand::List => render_products(&commands::list_products(catalog)),
        ShellCommand::Cart => render_cart(&commands::get_cart(cart)),
        ShellCommand::Add(position) => match resolve(catalog, position) {
            Ok(product) => match commands::add_to_cart(catalog, cart, &product.id) {
                Ok(view) => format!(
                    "Added {} - cart has {} item(s)\n",
                    product.name, view.totals.total_quantity
                ),
                Err(err) => format!("{}\n", err.message),
            },
            Err(message) => message,
        },
        ShellCommand::Remove(position) => match resolve(catalog, position) {
            Ok(product) => {
                commands::remove_from_cart(cart, &product.id);
                format!("Removed {}\n", product.name)
            }
            Err(message) => message,
        },
        ShellCommand::Quantity(position, count) => match resolve(catalog, position) {
            Ok(product) => {
                let view = commands::update_cart_item(cart, &product.id, count);
                render_cart(&view)
            }
            Err(message) => message,
        },
        ShellCommand::Clear => {
            commands::clear_cart(cart);
            "Cart cleared\n".to_string()
        }
        ShellCommand::Checkout => {
            let view = commands::get_cart(cart);
            if view.is_empty {
                "Checkout is disabled while the cart is empty\n".to_string()
            } else {
                let mut out = render_cart(&view);
                out.push_str("Checkout is a demo stub - no payment was processed\n");
                out
            }
        }
        ShellCommand::Help => HELP.to_string(),
        // Quit is handled by the caller before dispatch
        ShellCommand::Quit => String::new(),
    }
}

/// Resolves a 1-based grid position to its catalog product.
fn resolve<'a>(catalog: &'a CatalogState, position: usize) -> Result<&'a Product, String> {
    catalog
        .catalog()
        .get_by_position(position)
        .ok_or_else(|| format!("no product #{} - try 'list'\n", position))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use techstore_core::Catalog;

    #[test]
    fn test_parse_accepted_forms() {
        assert_eq!(parse("list"), Ok(ShellCommand::List));
        assert_eq!(parse("ls"), Ok(ShellCommand::List));
        assert_eq!(parse("cart"), Ok(ShellCommand::Cart));
        assert_eq!(parse("add 2"), Ok(ShellCommand::Add(2)));
        assert_eq!(parse("remove 3"), Ok(ShellCommand::Remove(3)));
        assert_eq!(parse("rm 3"), Ok(ShellCommand::Remove(3)));
        assert_eq!(parse("qty 1 5"), Ok(ShellCommand::Quantity(1, 5)));
        assert_eq!(parse("qty 1 -2"), Ok(ShellCommand::Quantity(1, -2)));
        assert_eq!(parse("clear"), Ok(ShellCommand::Clear));
        assert_eq!(parse("checkout"), Ok(ShellCommand::Checkout));
        assert_eq!(parse("help"), Ok(ShellCommand::Help));
        assert_eq!(parse("quit"), Ok(ShellCommand::Quit));
        assert_eq!(parse("  add   4  "), Ok(ShellCommand::Add(4)));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(parse("add").is_err());
        assert!(parse("add one").is_err());
        assert!(parse("qty 1").is_err());
        assert!(parse("qty 1 lots").is_err());
        assert!(parse("add 1 2").is_err());
        assert!(parse("buy 1").is_err());
    }

    #[test]
    fn test_parse_blank_line() {
        assert!(parse("").is_err());
        assert!(parse("   ").is_err());
    }

    fn demo_states() -> (CatalogState, CartState) {
        (CatalogState::new(Catalog::demo()), CartState::new())
    }

    #[test]
    fn test_dispatch_add_and_cart() {
        let (catalog, cart) = demo_states();

        let out = dispatch(&catalog, &cart, ShellCommand::Add(1));
        assert!(out.contains("Wireless Mouse"));
        assert!(out.contains("1 item(s)"));

        dispatch(&catalog, &cart, ShellCommand::Add(1));
        let out = dispatch(&catalog, &cart, ShellCommand::Cart);
        assert!(out.contains("x2"));
        assert!(out.contains("TOTAL $59.98"));
    }

    #[test]
    fn test_dispatch_quantity_and_remove() {
        let (catalog, cart) = demo_states();
        dispatch(&catalog, &cart, ShellCommand::Add(1));
        dispatch(&catalog, &cart, ShellCommand::Add(4));

        let out = dispatch(&catalog, &cart, ShellCommand::Quantity(1, 2));
        assert!(out.contains("TOTAL $105.97"));

        dispatch(&catalog, &cart, ShellCommand::Remove(1));
        let out = dispatch(&catalog, &cart, ShellCommand::Cart);
        assert!(!out.contains("Wireless Mouse"));
        assert!(out.contains("Laptop Stand"));
    }

    #[test]
    fn test_dispatch_bad_position() {
        let (catalog, cart) = demo_states();
        let out = dispatch(&catalog, &cart, ShellCommand::Add(99));
        assert!(out.contains("no product #99"));
        assert!(dispatch(&catalog, &cart, ShellCommand::Cart).contains("empty"));
    }

    #[test]
    fn test_dispatch_checkout_phases() {
        let (catalog, cart) = demo_states();

        let out = dispatch(&catalog, &cart, ShellCommand::Checkout);
        assert!(out.contains("disabled"));

        dispatch(&catalog, &cart, ShellCommand::Add(1));
        let out = dispatch(&catalog, &cart, ShellCommand::Checkout);
        assert!(out.contains("demo stub"));
        assert!(out.contains("TOTAL $29.99"));
    }

    #[test]
    fn test_render_empty_cart() {
        let (_, cart) = demo_states();
        let out = render_cart(&commands::get_cart(&cart));
        assert_eq!(out, "Your cart is empty\n");
    }

    #[test]
    fn test_render_products_lists_grid() {
        let (catalog, _) = demo_states();
        let out = render_products(&commands::list_products(&catalog));
        assert!(out.contains("1. 🖱️ Wireless Mouse"));
        assert!(out.contains("$29.99"));
        assert!(out.contains("(stock 15)"));
        assert_eq!(out.lines().count(), 6);
    }
}
