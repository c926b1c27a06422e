
/// Board wiring of proxies to channels.
pub mod board;


/// LSM6DSOX proxy.
pub mod lsm6dsox;



/// PWM property cells.
pub mod pwm;
