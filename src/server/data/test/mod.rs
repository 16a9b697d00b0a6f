mod aspect;
mod tome;
mod validation;
