use std::future::Future;

use crate::games::tictactoe::GameSnapshot;

/// Receives every state change of a session so a presentation layer can redraw.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;
}
