mod dom;
mod scenarios;
