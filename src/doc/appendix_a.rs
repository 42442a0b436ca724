/*!
# Error Messages

An error stops the line it happened on. Nothing after the failing word runs,
and nothing before it is undone. The stack is otherwise left alone, so the
session carries on with the next line.

## Stack underflow
A word needed more values than the stack holds. The stack is unchanged.

## Division by zero
The top of the stack was zero when `/` ran. Both operands are gone.

## Undefined word
The word is not a number and is not known to the interpreter.
The stack is unchanged.

*/
