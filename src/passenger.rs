//! # Módulo de Pasajeros
//!
//! Este módulo define la entidad que atraviesa el punto de control y su ciclo
//! de vida. En el simulador cada pasajero es un proceso cooperativo que se
//! suspende al esperar un recurso o un retardo temporizado; aquí ese proceso
//! se representa como una máquina de estados explícita cuyo estado se guarda
//! entre eventos.

/// Identificador único de un pasajero (índice en la tabla de pasajeros).
pub type PassengerId = usize;

/// Etapa del ciclo de vida de un pasajero dentro del punto de control.
///
/// Las transiciones siguen siempre el mismo orden:
/// `AwaitingIdCheck → InIdCheck → AwaitingScreening → InScreening → Done`.
/// Un pasajero que empieza a esperar nunca abandona la cola; la única forma
/// de no llegar a `Done` es que el horizonte de la simulación lo trunque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// En la cola de la revisión de identidad
    AwaitingIdCheck,
    /// En servicio en la revisión de identidad
    InIdCheck,
    /// En la cola del escáner elegido (la elección ya no se reevalúa)
    AwaitingScreening {
        /// Índice del escáner elegido por la política de cola más corta
        station: usize,
    },
    /// En servicio en el escáner elegido
    InScreening {
        /// Índice del escáner que lo atiende
        station: usize,
    },
    /// Salió del sistema y reportó su permanencia (estado terminal)
    Done,
}

/// Representa un pasajero que atraviesa el punto de control.
///
/// Cada pasajero registra su instante de llegada y la etapa en la que se
/// encuentra. Al completar ambas etapas reporta su permanencia
/// (`tiempo actual − llegada`) al recolector y pasa al estado terminal.
#[derive(Debug, Clone, Copy)]
pub struct Passenger {
    /// Identificador único del pasajero (orden de llegada, desde 0)
    pub id: PassengerId,
    /// Instante simulado de llegada al sistema, en minutos
    pub arrival_time: f64,
    /// Etapa actual del ciclo de vida
    pub stage: Stage,
}

impl Passenger {
    /// Crea un pasajero recién llegado, a la espera de la revisión de
    /// identidad.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use checkpoint_simulator::{Passenger, Stage};
    ///
    /// let passenger = Passenger::new(0, 1.25);
    /// assert_eq!(passenger.stage, Stage::AwaitingIdCheck);
    /// assert_eq!(passenger.arrival_time, 1.25);
    /// ```
    pub fn new(id: PassengerId, arrival_time: f64) -> Self {
        Self {
            id,
            arrival_time,
            stage: Stage::AwaitingIdCheck,
        }
    }

    /// Indica si el pasajero completó ambas etapas y salió del sistema.
    pub fn is_done(&self) -> bool {
        self.stage == Stage::Done
    }

    /// Permanencia del pasajero si terminara en el instante `now`.
    pub fn sojourn_at(&self, now: f64) -> f64 {
        now - self.arrival_time
    }
}
