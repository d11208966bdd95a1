mod combinators;
