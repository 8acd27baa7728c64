//! # Simulador de Punto de Control de Seguridad
//!
//! Esta biblioteca implementa un simulador de eventos discretos de un punto de
//! control de seguridad aeroportuaria de dos etapas: una revisión de identidad
//! compartida seguida de un banco paralelo de escáneres personales. El objetivo
//! es estimar el tiempo promedio de permanencia de los pasajeros en el sistema
//! bajo llegadas y servicios estocásticos.
//!
//! ## Características principales
//!
//! - **Reloj de eventos discretos**: el tiempo simulado solo avanza en los
//!   instantes de los eventos pendientes, ordenados por tiempo con desempate
//!   FIFO para garantizar determinismo.
//! - **Recursos con capacidad limitada**: cada etapa es un servidor con cola
//!   de espera FIFO estricta, sin prioridades ni desalojo.
//! - **Enrutamiento a la cola más corta**: al terminar la revisión de
//!   identidad, cada pasajero elige el escáner con menos pasajeros esperando.
//! - **Generadores estocásticos reproducibles**: llegadas Poisson y tiempos de
//!   servicio exponenciales/uniformes a partir de una única semilla.
//! - **Métricas**: registro de permanencias individuales y cálculo del
//!   promedio, con reportes en texto y CSV.
//!
//! ## Estructura del proyecto
//!
//! - `scheduler`: reloj simulado y cola de eventos pendientes
//! - `resource`: servidores con capacidad limitada y cola FIFO
//! - `passenger`: ciclo de vida de un pasajero como máquina de estados
//! - `random`: muestreo exponencial y uniforme con semilla fija
//! - `simulation`: módulo principal que coordina la simulación
//! - `metrics`: recolección de permanencias y generación de reportes
//! - `error`: taxonomía de errores del simulador

pub mod error;
pub mod metrics;
pub mod passenger;
pub mod random;
pub mod resource;
pub mod scheduler;
pub mod simulation;

// Re-exportar las estructuras principales para facilitar su uso
pub use error::SimulationError;
pub use metrics::{MetricsCalculator, SimulationMetrics, SojournCollector, SojournRecord};
pub use passenger::{Passenger, PassengerId, Stage};
pub use random::Sampler;
pub use resource::Resource;
pub use scheduler::{Event, EventQueue, EventTarget, SimulationClock};
pub use simulation::{Simulation, SimulationConfig};

/// Configuración por defecto del simulador (escenario base del enunciado).
pub mod config {
    use crate::simulation::SimulationConfig;

    /// Tasa de llegadas λ (pasajeros por minuto)
    pub const ARRIVAL_RATE: f64 = 5.0;

    /// Capacidad de la revisión de identidad (pasajeros en servicio a la vez)
    pub const ID_CHECK_CAPACITY: usize = 3;

    /// Tiempo medio de la revisión de identidad (minutos, exponencial)
    pub const ID_CHECK_MEAN: f64 = 0.75;

    /// Número de escáneres personales en paralelo
    pub const SCREENING_STATIONS: usize = 3;

    /// Capacidad de cada escáner personal
    pub const SCREENING_CAPACITY: usize = 1;

    /// Cota inferior del tiempo de escaneo (minutos, uniforme)
    pub const SCREENING_MIN: f64 = 0.5;

    /// Cota superior del tiempo de escaneo (minutos, uniforme)
    pub const SCREENING_MAX: f64 = 1.0;

    /// Horizonte de la simulación (minutos simulados)
    pub const HORIZON: f64 = 1000.0;

    /// Semilla por defecto para obtener corridas reproducibles
    pub const DEFAULT_SEED: u64 = 42;

    /// Configuración del escenario base: λ=5/min, revisión de identidad con
    /// capacidad 3 y media 0.75 min, 3 escáneres de capacidad 1 con servicio
    /// Uniforme[0.5, 1.0] min, horizonte de 1000 minutos.
    pub fn default_config() -> SimulationConfig {
        SimulationConfig {
            arrival_rate: ARRIVAL_RATE,
            id_check_capacity: ID_CHECK_CAPACITY,
            id_check_mean: ID_CHECK_MEAN,
            screening_stations: SCREENING_STATIONS,
            screening_capacity: SCREENING_CAPACITY,
            screening_min: SCREENING_MIN,
            screening_max: SCREENING_MAX,
            horizon: HORIZON,
            seed: Some(DEFAULT_SEED),
        }
    }
}
