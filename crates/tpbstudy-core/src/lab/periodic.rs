//! Small periodic table used by the chemistry lab.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Element {
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_number: u8,
    /// Standard atomic weight, u.
    pub atomic_mass: f64,
}

const fn el(symbol: &'static str, name: &'static str, atomic_number: u8, atomic_mass: f64) -> Element {
    Element {
        symbol,
        name,
        atomic_number,
        atomic_mass,
    }
}

static ELEMENTS: [Element; 22] = [
    el("H", "Hydrogen", 1, 1.008),
    el("He", "Helium", 2, 4.003),
    el("Li", "Lithium", 3, 6.941),
    el("Be", "Beryllium", 4, 9.012),
    el("B", "Boron", 5, 10.81),
    el("C", "Carbon", 6, 12.01),
    el("N", "Nitrogen", 7, 14.01),
    el("O", "Oxygen", 8, 16.00),
    el("F", "Fluorine", 9, 19.00),
    el("Ne", "Neon", 10, 20.18),
    el("Na", "Sodium", 11, 22.99),
    el("Mg", "Magnesium", 12, 24.31),
    el("Al", "Aluminium", 13, 26.98),
    el("Si", "Silicon", 14, 28.09),
    el("P", "Phosphorus", 15, 30.97),
    el("S", "Sulfur", 16, 32.07),
    el("Cl", "Chlorine", 17, 35.45),
    el("K", "Potassium", 19, 39.10),
    el("Ca", "Calcium", 20, 40.08),
    el("Fe", "Iron", 26, 55.85),
    el("Cu", "Copper", 29, 63.55),
    el("Zn", "Zinc", 30, 65.38),
];

/// All elements in table order.
pub fn elements() -> &'static [Element] {
    &ELEMENTS
}

/// Case-insensitive symbol lookup.
pub fn by_symbol(symbol: &str) -> Option<&'static Element> {
    let symbol = symbol.trim();
    ELEMENTS.iter().find(|e| e.symbol.eq_ignore_ascii_case(symbol))
}

pub fn by_atomic_number(atomic_number: u8) -> Option<&'static Element> {
    ELEMENTS.iter().find(|e| e.atomic_number == atomic_number)
}

/// Look up by symbol, or by atomic number when `query` is numeric.
pub fn lookup(query: &str) -> Option<&'static Element> {
    match query.trim().parse::<u8>() {
        Ok(n) => by_atomic_number(n),
        Err(_) => by_symbol(query),
    }
}
