//! Fixed regression tables mapping the four shape parameters to the spiral
//! shape polynomials.
//!
//! Each table row holds the weights for one slot of the design vector
//! `{1, A1, B1, A2, B2}`; dotting the design vector with a column yields one
//! polynomial coefficient, in ascending power order. The tables are
//! compiled-in constants and are never validated or mutated.

#![allow(clippy::unreadable_literal)]

/// Weights producing the total number of spiral turns, scaled by 360.
pub const TURNS: [f64; 5] = [
    963.166310413576,
    6.37772934525638,
    -26.9585473096045,
    -36.3953582023656,
    66.9416454453684,
];

/// Weights producing the four coefficients (ascending powers of phi) of the
/// modiolus-radius polynomial.
pub const MODIOLUS: [[f64; 4]; 5] = [
    [
        -0.0972007477234853,
        0.0652777719428317,
        0.00579010295961996,
        -0.000410053336041606,
    ],
    [
        0.745407586062517,
        -0.297795950930632,
        0.0353079060718429,
        -0.00125774660897636,
    ],
    [
        0.349940654425921,
        -0.0488173880945223,
        0.00235713329581525,
        -3.38189250648794e-5,
    ],
    [
        0.0567728210841444,
        0.115930983938798,
        -0.0170603835499829,
        0.000605305012135639,
    ],
    [
        -0.0613995454924607,
        0.170502985259421,
        -0.0267552502171719,
        0.00111572946871731,
    ],
];

/// Weights producing the five coefficients (ascending powers of phi) of the
/// height polynomial.
pub const HEIGHT: [[f64; 5]; 5] = [
    [
        -2.025562262381,
        0.308684774745994,
        -0.0245970612199774,
        0.00093743547596123,
        -6.49142944919421e-6,
    ],
    [
        -0.483933701821246,
        0.150263587271025,
        -0.0249700764778651,
        0.00184112837255666,
        -4.68696577096306e-5,
    ],
    [
        0.0936906993853392,
        0.0485929242340616,
        -0.0111388827166082,
        0.000852542615496957,
        -2.39666478178502e-5,
    ],
    [
        0.437215616236419,
        -0.609467318753365,
        0.147019129524084,
        -0.012345472153677,
        0.000341806092537278,
    ],
    [
        0.19884386428529,
        0.0706538846984097,
        -0.0490269768729332,
        0.00553612473205947,
        -0.000178036145575138,
    ],
];
