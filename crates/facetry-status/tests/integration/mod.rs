mod bootstrap;
mod indexing_pass;
