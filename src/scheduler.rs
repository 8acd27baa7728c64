//! # Módulo del Reloj y la Cola de Eventos
//!
//! Este módulo implementa el corazón del simulador de eventos discretos: un
//! reloj de tiempo simulado que solo avanza en las fronteras de los eventos,
//! y una cola de eventos pendientes ordenada por tiempo. Los empates en el
//! tiempo se resuelven por orden de inserción (FIFO), de modo que dos corridas
//! con la misma semilla producen exactamente la misma secuencia de eventos.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::passenger::PassengerId;

/// Reloj de tiempo simulado, en minutos.
///
/// El tiempo es un real no negativo que avanza de forma monótona: entre dos
/// eventos consecutivos no ocurre nada. El reloj pertenece exclusivamente al
/// lazo de simulación; nadie más lo modifica.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulationClock {
    now: f64,
}

impl SimulationClock {
    /// Crea un reloj en t = 0.
    pub fn new() -> Self {
        Self { now: 0.0 }
    }

    /// Tiempo simulado actual, en minutos.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Avanza el reloj hasta el instante `time`.
    ///
    /// El reloj nunca retrocede: `time` debe ser mayor o igual al tiempo
    /// actual, lo que queda garantizado porque los eventos se despachan en
    /// orden cronológico.
    pub fn advance_to(&mut self, time: f64) {
        debug_assert!(
            time >= self.now,
            "el reloj no puede retroceder ({} < {})",
            time,
            self.now
        );
        self.now = time;
    }
}

/// Destino de un evento: a quién hay que reanudar al despacharlo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    /// Llega un nuevo pasajero al sistema (proceso de llegadas).
    Arrival,
    /// Se reanuda el proceso suspendido del pasajero indicado.
    Wake(PassengerId),
}

/// Un evento pendiente: un instante simulado más el proceso a reanudar.
///
/// El orden total entre eventos es (tiempo, secuencia de inserción). La
/// secuencia desempata los eventos simultáneos en orden FIFO, que es lo que
/// hace determinista la simulación para una semilla fija.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// Instante simulado en que debe despacharse el evento
    pub time: f64,
    /// Número de secuencia asignado al insertar (desempate FIFO)
    seq: u64,
    /// Proceso a reanudar
    pub target: EventTarget,
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq && self.time == other.time
    }
}

impl Eq for Event {}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .total_cmp(&other.time)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Cola de eventos pendientes del simulador.
///
/// Montículo de mínimos sobre el orden (tiempo, secuencia). La secuencia es
/// monótona creciente y se asigna al insertar, por lo que los eventos con el
/// mismo tiempo salen en el orden en que entraron.
#[derive(Debug, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Reverse<Event>>,
    next_seq: u64,
}

impl EventQueue {
    /// Crea una cola de eventos vacía.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Inserta un evento en el instante `time` con el próximo número de
    /// secuencia.
    pub fn push(&mut self, time: f64, target: EventTarget) {
        let event = Event {
            time,
            seq: self.next_seq,
            target,
        };
        self.next_seq += 1;
        self.heap.push(Reverse(event));
    }

    /// Extrae el evento más próximo, o `None` si no quedan eventos.
    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|Reverse(event)| event)
    }

    /// Instante del evento más próximo sin extraerlo.
    pub fn peek_time(&self) -> Option<f64> {
        self.heap.peek().map(|Reverse(event)| event.time)
    }

    /// Cantidad de eventos pendientes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Indica si no quedan eventos pendientes.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_advances_monotonically() {
        let mut clock = SimulationClock::new();
        assert_eq!(clock.now(), 0.0);

        clock.advance_to(1.5);
        assert_eq!(clock.now(), 1.5);

        // Avanzar al mismo instante es válido (eventos simultáneos)
        clock.advance_to(1.5);
        assert_eq!(clock.now(), 1.5);

        clock.advance_to(10.0);
        assert_eq!(clock.now(), 10.0);
    }

    #[test]
    fn test_events_pop_in_time_order() {
        let mut queue = EventQueue::new();
        queue.push(3.0, EventTarget::Wake(0));
        queue.push(1.0, EventTarget::Wake(1));
        queue.push(2.0, EventTarget::Arrival);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop().unwrap().time, 1.0);
        assert_eq!(queue.pop().unwrap().time, 2.0);
        assert_eq!(queue.pop().unwrap().time, 3.0);
        assert!(queue.pop().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_simultaneous_events_keep_insertion_order() {
        let mut queue = EventQueue::new();

        // Tres eventos en el mismo instante: deben salir en orden FIFO
        queue.push(5.0, EventTarget::Wake(10));
        queue.push(5.0, EventTarget::Wake(20));
        queue.push(5.0, EventTarget::Wake(30));

        assert_eq!(queue.pop().unwrap().target, EventTarget::Wake(10));
        assert_eq!(queue.pop().unwrap().target, EventTarget::Wake(20));
        assert_eq!(queue.pop().unwrap().target, EventTarget::Wake(30));
    }

    #[test]
    fn test_peek_time_does_not_remove() {
        let mut queue = EventQueue::new();
        assert_eq!(queue.peek_time(), None);

        queue.push(2.5, EventTarget::Arrival);
        assert_eq!(queue.peek_time(), Some(2.5));
        assert_eq!(queue.len(), 1);

        let event = queue.pop().unwrap();
        assert_eq!(event.time, 2.5);
        assert_eq!(event.target, EventTarget::Arrival);
    }
}
