//! # Módulo de Recursos
//!
//! Este módulo define los servidores con capacidad limitada del punto de
//! control: la revisión de identidad (compartida por todos los pasajeros) y
//! cada escáner personal. Un recurso mantiene cuántos pasajeros atiende en
//! este momento y una cola FIFO estricta de solicitudes pendientes, sin
//! prioridades ni desalojo. También implementa la política de enrutamiento a
//! la cola más corta sobre el banco de escáneres.

use std::collections::VecDeque;

use crate::passenger::PassengerId;

/// Servidor con capacidad limitada y cola de espera FIFO.
///
/// Invariantes: la cantidad en servicio nunca supera la capacidad, y la
/// capacidad es inmutable después de la construcción. Cada `try_acquire`
/// concedido debe emparejarse con exactamente un `release` del mismo
/// portador lógico; un `release` faltante pierde capacidad de forma
/// permanente.
#[derive(Debug)]
pub struct Resource {
    /// Nombre identificador del recurso (para logs y reportes)
    name: String,
    /// Cantidad máxima de pasajeros en servicio simultáneo
    capacity: usize,
    /// Cantidad de pasajeros actualmente en servicio
    in_service: usize,
    /// Solicitudes pendientes en orden de llegada
    wait_queue: VecDeque<PassengerId>,
}

impl Resource {
    /// Crea un recurso con la capacidad indicada.
    ///
    /// La capacidad debe ser positiva; la validación de configuración lo
    /// garantiza antes de construir los recursos.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use checkpoint_simulator::Resource;
    ///
    /// let resource = Resource::new("Revisión de identidad", 3);
    /// assert_eq!(resource.capacity(), 3);
    /// assert_eq!(resource.in_service(), 0);
    /// ```
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            capacity,
            in_service: 0,
            wait_queue: VecDeque::new(),
        }
    }

    /// Solicita un lugar de servicio para el pasajero `id`.
    ///
    /// Si hay capacidad libre, el pasajero entra en servicio de inmediato y
    /// se devuelve `true`. Si no, el pasajero queda al final de la cola FIFO
    /// y se devuelve `false`; el lazo de simulación lo reanudará cuando
    /// `release` le conceda el lugar.
    pub fn try_acquire(&mut self, id: PassengerId) -> bool {
        if self.in_service < self.capacity {
            self.in_service += 1;
            true
        } else {
            self.wait_queue.push_back(id);
            false
        }
    }

    /// Libera un lugar de servicio.
    ///
    /// Si la cola no está vacía, el lugar pasa directamente a la cabeza de la
    /// cola: se devuelve su id para que el lazo de simulación programe su
    /// reanudación en el instante actual (retardo cero). Si la cola está
    /// vacía, el lugar queda libre y se devuelve `None`.
    pub fn release(&mut self) -> Option<PassengerId> {
        debug_assert!(self.in_service > 0, "release sin acquire previo en '{}'", self.name);
        self.in_service -= 1;

        let next = self.wait_queue.pop_front();
        if next.is_some() {
            self.in_service += 1;
        }
        debug_assert!(self.in_service <= self.capacity);
        next
    }

    /// Cantidad de pasajeros esperando en cola (sin contar los que están en
    /// servicio). Es la medida que usa la política de enrutamiento.
    pub fn queue_len(&self) -> usize {
        self.wait_queue.len()
    }

    /// Cantidad de pasajeros actualmente en servicio.
    pub fn in_service(&self) -> usize {
        self.in_service
    }

    /// Capacidad configurada del recurso.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Nombre del recurso.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Elige el índice del recurso con la cola de espera más corta.
///
/// Política de unirse a la cola más corta: se compara solo la cantidad de
/// pasajeros esperando (no los que están en servicio) y los empates los gana
/// el primer recurso declarado, recorriendo el banco en orden estable. La
/// elección se evalúa una única vez, en el momento en que el pasajero termina
/// la revisión de identidad; no se reevalúa mientras espera.
///
/// Devuelve `None` solo si el banco está vacío, cosa que la validación de
/// configuración descarta.
///
/// Nota: no se usa `Iterator::min_by_key` porque ante empates devuelve el
/// último mínimo, y aquí el empate debe ganarlo el primero.
pub fn shortest_queue_index(resources: &[Resource]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (index, resource) in resources.iter().enumerate() {
        let len = resource.queue_len();
        match best {
            Some((_, best_len)) if len >= best_len => {}
            _ => best = Some((index, len)),
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_within_capacity_is_immediate() {
        let mut resource = Resource::new("Revisión", 2);

        assert!(resource.try_acquire(0));
        assert!(resource.try_acquire(1));
        assert_eq!(resource.in_service(), 2);
        assert_eq!(resource.queue_len(), 0);
    }

    #[test]
    fn test_acquire_at_capacity_queues_fifo() {
        let mut resource = Resource::new("Revisión", 1);

        assert!(resource.try_acquire(0));
        assert!(!resource.try_acquire(1));
        assert!(!resource.try_acquire(2));

        // La cantidad en servicio nunca supera la capacidad
        assert_eq!(resource.in_service(), 1);
        assert_eq!(resource.queue_len(), 2);
    }

    #[test]
    fn test_release_grants_to_queue_head() {
        let mut resource = Resource::new("Escáner", 1);

        assert!(resource.try_acquire(0));
        assert!(!resource.try_acquire(1));
        assert!(!resource.try_acquire(2));

        // El primero en la cola recibe el lugar, en orden de llegada
        assert_eq!(resource.release(), Some(1));
        assert_eq!(resource.in_service(), 1);
        assert_eq!(resource.queue_len(), 1);

        assert_eq!(resource.release(), Some(2));
        assert_eq!(resource.release(), None);
        assert_eq!(resource.in_service(), 0);
    }

    #[test]
    fn test_release_with_empty_queue_frees_slot() {
        let mut resource = Resource::new("Escáner", 2);

        assert!(resource.try_acquire(0));
        assert_eq!(resource.release(), None);
        assert_eq!(resource.in_service(), 0);

        // El lugar liberado queda disponible para el siguiente acquire
        assert!(resource.try_acquire(1));
        assert_eq!(resource.in_service(), 1);
    }

    #[test]
    fn test_shortest_queue_picks_minimum() {
        let mut bank = vec![
            Resource::new("Escáner 1", 1),
            Resource::new("Escáner 2", 1),
            Resource::new("Escáner 3", 1),
        ];

        // Llenar los tres escáneres y encolar: 2 esperan en el 0, 1 en el 1
        for (i, scanner) in bank.iter_mut().enumerate() {
            assert!(scanner.try_acquire(i));
        }
        bank[0].try_acquire(10);
        bank[0].try_acquire(11);
        bank[1].try_acquire(12);

        assert_eq!(shortest_queue_index(&bank), Some(2));
    }

    #[test]
    fn test_shortest_queue_tie_goes_to_first_declared() {
        let bank = vec![
            Resource::new("Escáner 1", 1),
            Resource::new("Escáner 2", 1),
            Resource::new("Escáner 3", 1),
        ];

        // Todas las colas están vacías: gana el primero
        assert_eq!(shortest_queue_index(&bank), Some(0));
    }

    #[test]
    fn test_shortest_queue_ignores_in_service() {
        let mut bank = vec![Resource::new("Escáner 1", 1), Resource::new("Escáner 2", 1)];

        // El escáner 0 está ocupado pero sin cola: para la política sigue
        // empatado en cero con el 1, y el empate lo gana el primero
        assert!(bank[0].try_acquire(0));
        assert_eq!(shortest_queue_index(&bank), Some(0));

        // Con un pasajero esperando en el 0, gana el 1
        bank[0].try_acquire(1);
        assert_eq!(shortest_queue_index(&bank), Some(1));
    }

    #[test]
    fn test_shortest_queue_empty_bank() {
        let bank: Vec<Resource> = Vec::new();
        assert_eq!(shortest_queue_index(&bank), None);
    }
}
