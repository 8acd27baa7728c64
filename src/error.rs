//! # Módulo de Errores
//!
//! Taxonomía de errores del simulador. Solo existen dos condiciones de error:
//! una configuración inválida detectada antes de correr la simulación, y la
//! consulta del promedio de permanencia sin pasajeros completados. La
//! contención por recursos y las esperas en cola son operación normal y nunca
//! se reportan como errores.

use thiserror::Error;

/// Errores que puede producir el simulador.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// La configuración es inválida y la simulación no debe ejecutarse.
    ///
    /// Se detecta durante la validación inicial: tasas o capacidades no
    /// positivas, banco de escáneres vacío, intervalo de escaneo invertido
    /// u horizonte negativo.
    #[error("configuración inválida: {0}")]
    Configuration(String),

    /// Se consultó el promedio de permanencia sin pasajeros completados.
    ///
    /// Ocurre cuando el horizonte es menor que la permanencia mínima posible
    /// (por ejemplo, horizonte cero): ningún pasajero termina ambas etapas y
    /// el promedio no está definido. Se señala explícitamente en lugar de
    /// devolver un valor fabricado.
    #[error("no hay pasajeros completados: el promedio de permanencia no está definido")]
    EmptyResult,
}
