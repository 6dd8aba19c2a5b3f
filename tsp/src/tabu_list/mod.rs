pub mod simple_tabu_list;

/// Short-term memory of recently-applied exchanges.
pub trait TabuList {
    /// Check if the exchange of cities `a` and `b` is permitted.
    /// `(a, b)` and `(b, a)` are the same exchange.
    fn is_possible_move(&self, a: usize, b: usize) -> bool;
    /// Record an exchange, evicting the oldest record at capacity.
    fn add_turn_to_tabu_list(&mut self, a: usize, b: usize);
}
