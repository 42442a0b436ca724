/*!
# Words

Stack effects are written `( before -- after )` with the top of the
stack on the right. Named words may be typed in any case.

## Numbers
An optional `+` or `-` followed by decimal digits. There is no size limit.
`1.5` and `1e3` are not numbers and report `Undefined word`.

## Arithmetic
| Word     | Effect               | Notes |
|----------|----------------------|-------|
| `+`      | `( b a -- b+a )`     | |
| `-`      | `( b a -- b-a )`     | |
| `*`      | `( b a -- b*a )`     | |
| `/`      | `( b a -- b/a )`     | Exact. Dividing by zero discards both operands. |
| `negate` | `( a -- -a )`        | |
| `abs`    | `( a -- abs(a) )`    | |

## Inspection
| Word     | Effect               | Notes |
|----------|----------------------|-------|
| `.`      | `( a -- )`           | Prints `a` and a space. |
| `.s`     | `( -- )`             | Prints `<depth>` and every value. |
| `depth`  | `( -- n )`           | |
| `words`  | `( -- )`             | Prints every known word. |

## Stack manipulation
| Word     | Effect                  |
|----------|-------------------------|
| `dup`    | `( a -- a a )`          |
| `drop`   | `( a -- )`              |
| `swap`   | `( a b -- b a )`        |
| `over`   | `( a b -- a b a )`      |
| `rot`    | `( a b c -- b c a )`    |
| `clear`  | `( ... -- )`            |

*/
