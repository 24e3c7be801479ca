//! List state for the main-todo and sub-todo collections.
//!
//! DESIGN
//! ======
//! Both collections follow the same load → mutate → reload contract: a
//! successful mutation is always followed by a full re-fetch, so these
//! structs never carry optimistic local edits.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use crate::net::types::{MainTodo, SubTodo};

/// Main-todo collection shown on the home page.
#[derive(Clone, Debug)]
pub struct MainTodosState {
    pub items: Vec<MainTodo>,
    pub loading: bool,
}

impl Default for MainTodosState {
    fn default() -> Self {
        // Pages fetch on mount, so the first render is a loading state.
        Self {
            items: Vec::new(),
            loading: true,
        }
    }
}

/// Sub-todo collection for one main todo, keyed by its slug.
#[derive(Clone, Debug)]
pub struct SubTodosState {
    pub items: Vec<SubTodo>,
    pub loading: bool,
}

impl Default for SubTodosState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
        }
    }
}
